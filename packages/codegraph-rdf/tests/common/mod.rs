//! Shared fixtures for codegraph-rdf integration tests

#![allow(dead_code)]

use codegraph_rdf::shared::models::*;
use codegraph_rdf::{BuildConfig, Context, ExpressionDetail};

pub const BASE: &str = "https://ex.org/code#";

pub fn build_config() -> BuildConfig {
    BuildConfig::new(BASE)
        .with_file_path("lib/my_app/worker.ex")
        .with_expressions(ExpressionDetail::Reduced)
}

pub fn context() -> Context {
    Context::new(build_config()).with_expression_counter()
}

pub fn iri(local: &str) -> Iri {
    Iri::new(format!("{}{}", BASE, local))
}

fn function(module: &str, name: &str, clauses: Vec<ClauseRecord>) -> FunctionRecord {
    FunctionRecord {
        module: module.into(),
        name: name.into(),
        arity: clauses.first().map(|c| c.params.len() as u32).unwrap_or(0),
        location: Some(SourceLocation::new(10, Some(14))),
        clauses,
        ..Default::default()
    }
}

/// One record in every collection
///
/// ```text
/// defmodule MyApp.Worker do
///   use GenServer
///   defstruct [:id, count: 0]
///   @type t :: %__MODULE__{}
///   @spec start(integer) :: :ok
///   def start(x) when x > 0, do: x > y + 1
///   defmodule Inner do end
/// end
/// ```
pub fn sample_input() -> AnalysisInput {
    let mut module = ModuleRecord::new("MyApp.Worker");
    module.docstring = Docstring::Text("Worker process".into());
    module.location = Some(SourceLocation::new(1, Some(40)));
    module.directives.push(Directive::new(DirectiveKind::Use, "GenServer"));
    module.directives.push(Directive::new(DirectiveKind::Alias, "MyApp.Repo"));
    module.functions.push(MemberRef::new("start", 1));
    module.types.push(MemberRef::new("t", 0));

    let mut inner = ModuleRecord::new("MyApp.Worker.Inner");
    inner.parent = Some("MyApp.Worker".into());

    let start = function(
        "MyApp.Worker",
        "start",
        vec![ClauseRecord {
            params: vec![Ast::var("x")],
            guard: Some(Ast::op(">", Ast::var("x"), Ast::int(0))),
            body: Some(Ast::op(
                ">",
                Ast::var("x"),
                Ast::op("+", Ast::var("y"), Ast::int(1)),
            )),
        }],
    );
    let chars = function(
        "MyApp.Worker",
        "chars",
        vec![ClauseRecord {
            params: vec![],
            guard: None,
            body: Some(Ast::list(vec![Ast::int(1), Ast::int(2), Ast::int(3)])),
        }],
    );

    AnalysisInput {
        module: Some(module),
        nested_modules: vec![inner],
        functions: vec![start, chars],
        types: vec![TypeRecord {
            module: "MyApp.Worker".into(),
            name: "t".into(),
            definition: Some(Ast::call("%{}", vec![])),
            ..Default::default()
        }],
        specs: vec![SpecRecord {
            module: "MyApp.Worker".into(),
            name: "start".into(),
            arity: 1,
            kind: SpecKind::Spec,
            ast: Ast::op(
                "::",
                Ast::call("start", vec![Ast::call("integer", vec![])]),
                Ast::atom("ok"),
            ),
        }],
        structs: vec![StructRecord {
            module: "MyApp.Worker".into(),
            fields: vec![
                StructFieldRecord {
                    name: "id".into(),
                    default: None,
                },
                StructFieldRecord {
                    name: "count".into(),
                    default: Some(Ast::int(0)),
                },
            ],
            enforce_keys: vec!["id".into()],
            ..Default::default()
        }],
        protocols: vec![ProtocolRecord {
            name: "MyApp.Sizable".into(),
            functions: vec![MemberRef::new("size", 1)],
            ..Default::default()
        }],
        implementations: vec![ImplementationRecord {
            protocol: "MyApp.Sizable".into(),
            for_type: "MyApp.Worker".into(),
            functions: vec![MemberRef::new("size", 1)],
        }],
        behaviours: vec![BehaviourRecord {
            module: "MyApp.Worker".into(),
            callbacks: vec![],
            implements: vec!["GenServer".into()],
        }],
        genservers: vec![GenServerRecord {
            module: "MyApp.Worker".into(),
            callbacks: vec![MemberRef::new("init", 1), MemberRef::new("handle_call", 3)],
            use_option_count: 0,
        }],
        supervisors: vec![SupervisorRecord {
            module: "MyApp.Supervisor".into(),
            strategy: Some(StrategyRecord {
                kind: "one_for_one".into(),
                max_restarts: Some(3),
                max_seconds: Some(5),
            }),
            children: vec![ChildSpecRecord {
                id: "MyApp.Worker".into(),
                module: Some("MyApp.Worker".into()),
                restart: None,
            }],
            ..Default::default()
        }],
        agents: vec![AgentRecord {
            module: "MyApp.Cache".into(),
            use_option_count: 1,
        }],
        tasks: vec![TaskRecord {
            module: "MyApp.Job".into(),
            kind: TaskKind::Task,
        }],
    }
}
