//! Builder identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// One entry per builder the orchestrator can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BuilderKind {
    Module,
    Function,
    Type,
    Struct,
    Protocol,
    Behaviour,
    GenServer,
    Supervisor,
    Agent,
    Task,
}

impl BuilderKind {
    /// Canonical (sequential) order
    pub const ALL: [BuilderKind; 10] = [
        BuilderKind::Module,
        BuilderKind::Function,
        BuilderKind::Type,
        BuilderKind::Struct,
        BuilderKind::Protocol,
        BuilderKind::Behaviour,
        BuilderKind::GenServer,
        BuilderKind::Supervisor,
        BuilderKind::Agent,
        BuilderKind::Task,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuilderKind::Module => "module",
            BuilderKind::Function => "function",
            BuilderKind::Type => "type",
            BuilderKind::Struct => "struct",
            BuilderKind::Protocol => "protocol",
            BuilderKind::Behaviour => "behaviour",
            BuilderKind::GenServer => "gen_server",
            BuilderKind::Supervisor => "supervisor",
            BuilderKind::Agent => "agent",
            BuilderKind::Task => "task",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BuilderKind::Module => "Modules, nesting, directives and containment",
            BuilderKind::Function => "Functions, macros, clauses, parameters and bodies",
            BuilderKind::Type => "Type definitions, type expressions and specs",
            BuilderKind::Struct => "Structs, exceptions and their fields",
            BuilderKind::Protocol => "Protocols and protocol implementations",
            BuilderKind::Behaviour => "Behaviours, callbacks and implementers",
            BuilderKind::GenServer => "GenServer implementations",
            BuilderKind::Supervisor => "Supervisors, strategies and child specs",
            BuilderKind::Agent => "Agent implementations",
            BuilderKind::Task => "Task implementations",
        }
    }

    /// Process-pattern builders
    pub fn is_otp(&self) -> bool {
        matches!(
            self,
            BuilderKind::GenServer | BuilderKind::Supervisor | BuilderKind::Agent | BuilderKind::Task
        )
    }
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuilderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuilderKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = BuilderKind::ALL.iter().map(BuilderKind::name).collect();
                ConfigError::unknown_builder(s, &names)
            })
    }
}

impl TryFrom<String> for BuilderKind {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BuilderKind> for String {
    fn from(kind: BuilderKind) -> Self {
        kind.name().to_string()
    }
}
