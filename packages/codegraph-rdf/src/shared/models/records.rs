//! Normalized input records
//!
//! Produced by the extraction phase, consumed read-only by the builders.
//! Every collection is optional on the wire (`#[serde(default)]`); only the
//! module record is mandatory for an orchestrated build.

use serde::{Deserialize, Serialize};

use super::ast::Ast;

/// Line range of a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start_line: u32,
    #[serde(default)]
    pub end_line: Option<u32>,
}

impl SourceLocation {
    pub fn new(start_line: u32, end_line: Option<u32>) -> Self {
        Self {
            start_line,
            end_line,
        }
    }
}

/// Documentation attribute state
///
/// `Suppressed` (`@doc false`) and `Absent` are different facts; neither
/// emits a docstring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Docstring {
    #[default]
    Absent,
    Suppressed,
    Text(String),
}

impl Docstring {
    pub fn text(&self) -> Option<&str> {
        match self {
            Docstring::Text(text) => Some(text),
            Docstring::Absent | Docstring::Suppressed => None,
        }
    }
}

/// `name/arity` reference to a module member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberRef {
    pub name: String,
    pub arity: u32,
}

impl MemberRef {
    pub fn new(name: impl Into<String>, arity: u32) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }
}

// ============================================================
// Modules
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectiveKind {
    Alias,
    Import,
    Require,
    Use,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Dotted target module name
    pub target: String,
    /// `alias A.B, as: C`
    #[serde(default)]
    pub alias_as: Option<String>,
    /// Number of options passed to `use`
    #[serde(default)]
    pub option_count: usize,
}

impl Directive {
    pub fn new(kind: DirectiveKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            alias_as: None,
            option_count: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Dotted full name (`A.B.C`)
    pub name: String,
    /// Enclosing module for nested definitions
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub docstring: Docstring,
    #[serde(default)]
    pub location: Option<SourceLocation>,
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub functions: Vec<MemberRef>,
    #[serde(default)]
    pub macros: Vec<MemberRef>,
    #[serde(default)]
    pub types: Vec<MemberRef>,
}

impl ModuleRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn is_nested(&self) -> bool {
        self.parent.is_some()
    }
}

// ============================================================
// Functions and macros
// ============================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    #[default]
    Function,
    Macro,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClauseRecord {
    #[serde(default)]
    pub params: Vec<Ast>,
    #[serde(default)]
    pub guard: Option<Ast>,
    #[serde(default)]
    pub body: Option<Ast>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub module: String,
    pub name: String,
    pub arity: u32,
    /// Lowest callable arity when default arguments exist
    #[serde(default)]
    pub min_arity: Option<u32>,
    #[serde(default)]
    pub kind: FunctionKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub docstring: Docstring,
    #[serde(default)]
    pub location: Option<SourceLocation>,
    #[serde(default)]
    pub clauses: Vec<ClauseRecord>,
}

// ============================================================
// Types and specs
// ============================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeVisibility {
    #[default]
    Public,
    Private,
    Opaque,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub module: String,
    pub name: String,
    #[serde(default)]
    pub visibility: TypeVisibility,
    /// Declared type parameters, in order
    #[serde(default)]
    pub parameters: Vec<String>,
    /// Right-hand side of the definition
    #[serde(default)]
    pub definition: Option<Ast>,
    #[serde(default)]
    pub docstring: Docstring,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

impl TypeRecord {
    pub fn arity(&self) -> u32 {
        self.parameters.len() as u32
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecKind {
    #[default]
    Spec,
    Callback,
    MacroCallback,
}

/// `@spec` / `@callback` / `@macrocallback`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRecord {
    pub module: String,
    pub name: String,
    pub arity: u32,
    #[serde(default)]
    pub kind: SpecKind,
    /// Raw `name(params) :: return` tree, optionally wrapped in `when`
    pub ast: Ast,
}

// ============================================================
// Structs, protocols, behaviours
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructFieldRecord {
    pub name: String,
    #[serde(default)]
    pub default: Option<Ast>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructRecord {
    pub module: String,
    #[serde(default)]
    pub fields: Vec<StructFieldRecord>,
    #[serde(default)]
    pub enforce_keys: Vec<String>,
    /// `defexception` rather than `defstruct`
    #[serde(default)]
    pub is_exception: bool,
    /// Protocols listed in `@derive`
    #[serde(default)]
    pub derives: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtocolRecord {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<MemberRef>,
    #[serde(default)]
    pub fallback_to_any: bool,
    #[serde(default)]
    pub docstring: Docstring,
}

/// `defimpl Protocol, for: Type`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImplementationRecord {
    pub protocol: String,
    pub for_type: String,
    #[serde(default)]
    pub functions: Vec<MemberRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRecord {
    pub name: String,
    pub arity: u32,
    #[serde(default)]
    pub is_macro: bool,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviourRecord {
    pub module: String,
    /// Callbacks this module defines (non-empty makes it a behaviour)
    #[serde(default)]
    pub callbacks: Vec<CallbackRecord>,
    /// Behaviours this module declares via `@behaviour`
    #[serde(default)]
    pub implements: Vec<String>,
}

// ============================================================
// Process patterns
// ============================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenServerRecord {
    pub module: String,
    /// Implemented callbacks (`init/1`, `handle_call/3`, ...)
    #[serde(default)]
    pub callbacks: Vec<MemberRef>,
    #[serde(default)]
    pub use_option_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupervisorKind {
    #[default]
    Supervisor,
    Dynamic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRecord {
    /// `one_for_one`, `one_for_all`, `rest_for_one`
    pub kind: String,
    #[serde(default)]
    pub max_restarts: Option<u32>,
    #[serde(default)]
    pub max_seconds: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildSpecRecord {
    pub id: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub restart: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupervisorRecord {
    pub module: String,
    #[serde(default)]
    pub kind: SupervisorKind,
    #[serde(default)]
    pub strategy: Option<StrategyRecord>,
    #[serde(default)]
    pub children: Vec<ChildSpecRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub module: String,
    #[serde(default)]
    pub use_option_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    #[default]
    Task,
    Async,
    Supervised,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Task => "task",
            TaskKind::Async => "async",
            TaskKind::Supervised => "supervised",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub module: String,
    #[serde(default)]
    pub kind: TaskKind,
}

// ============================================================
// Bundle
// ============================================================

/// Everything extracted from one source file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Mandatory for orchestrated builds
    #[serde(default)]
    pub module: Option<ModuleRecord>,
    #[serde(default)]
    pub nested_modules: Vec<ModuleRecord>,
    #[serde(default)]
    pub functions: Vec<FunctionRecord>,
    #[serde(default)]
    pub types: Vec<TypeRecord>,
    #[serde(default)]
    pub specs: Vec<SpecRecord>,
    #[serde(default)]
    pub structs: Vec<StructRecord>,
    #[serde(default)]
    pub protocols: Vec<ProtocolRecord>,
    #[serde(default)]
    pub implementations: Vec<ImplementationRecord>,
    #[serde(default)]
    pub behaviours: Vec<BehaviourRecord>,
    #[serde(default)]
    pub genservers: Vec<GenServerRecord>,
    #[serde(default)]
    pub supervisors: Vec<SupervisorRecord>,
    #[serde(default)]
    pub agents: Vec<AgentRecord>,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

impl AnalysisInput {
    pub fn for_module(module: ModuleRecord) -> Self {
        Self {
            module: Some(module),
            ..Default::default()
        }
    }
}
