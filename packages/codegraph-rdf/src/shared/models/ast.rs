//! Normalized syntax tree
//!
//! The extraction phase hands builders this tree for every expression,
//! pattern, spec and type definition. It mirrors the quoted form of the
//! analyzed language:
//!
//! - scalars, lists and literal 2-tuples are themselves;
//! - everything else is a three-part [`Form`]: a head (an atom name or another
//!   tree, as in remote calls), metadata, and an argument list. A form whose
//!   argument list is `None` is a variable reference.
//!
//! ```text
//! x > y + 1
//!   Form { head: ">", args: [Form { head: "x", args: None },
//!                            Form { head: "+", args: [Form { head: "y" }, 1] }] }
//! ```

use serde::{Deserialize, Serialize};

/// Levels below a root that builders descend before emitting a generic node
pub const MAX_NESTING_DEPTH: usize = 128;

/// Syntax tree node
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ast {
    Integer(i64),
    Float(f64),
    String(String),
    Atom(String),
    List(Vec<Ast>),
    /// Literal tuple (the quoted form only keeps 2-tuples literal; larger
    /// tuples arrive as a `{}` form, both are accepted)
    Tuple(Vec<Ast>),
    Form(Box<Form>),
}

/// Three-part form: `{head, meta, args}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub head: Head,
    #[serde(default)]
    pub meta: Meta,
    /// `None` marks a variable (the quoted form carries a context atom there)
    #[serde(default)]
    pub args: Option<Vec<Ast>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Head {
    Atom(String),
    Expr(Ast),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl Form {
    /// Head atom, if the head is an atom
    pub fn name(&self) -> Option<&str> {
        match &self.head {
            Head::Atom(name) => Some(name),
            Head::Expr(_) => None,
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name() == Some(name)
    }

    pub fn args(&self) -> &[Ast] {
        self.args.as_deref().unwrap_or(&[])
    }

    pub fn is_variable(&self) -> bool {
        self.args.is_none() && self.name().is_some()
    }

    fn detach_children(&mut self, pending: &mut Vec<Ast>) {
        if let Some(args) = self.args.take() {
            pending.extend(args);
        }
        if let Head::Expr(_) = self.head {
            if let Head::Expr(head) = std::mem::replace(&mut self.head, Head::Atom(String::new())) {
                pending.push(head);
            }
        }
    }
}

// Generated code can nest thousands of levels: clone and drop without recursion

impl Clone for Ast {
    fn clone(&self) -> Self {
        enum Step<'a> {
            Visit(&'a Ast),
            Assemble(&'a Ast),
        }

        let mut steps = vec![Step::Visit(self)];
        let mut built: Vec<Ast> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(ast) => match ast {
                    Ast::Integer(n) => built.push(Ast::Integer(*n)),
                    Ast::Float(f) => built.push(Ast::Float(*f)),
                    Ast::String(s) => built.push(Ast::String(s.clone())),
                    Ast::Atom(a) => built.push(Ast::Atom(a.clone())),
                    Ast::List(items) | Ast::Tuple(items) => {
                        steps.push(Step::Assemble(ast));
                        steps.extend(items.iter().rev().map(Step::Visit));
                    }
                    Ast::Form(form) => {
                        steps.push(Step::Assemble(ast));
                        steps.extend(form.args().iter().rev().map(Step::Visit));
                        if let Head::Expr(head) = &form.head {
                            steps.push(Step::Visit(head));
                        }
                    }
                },
                Step::Assemble(ast) => {
                    let assembled = match ast {
                        Ast::List(items) => Ast::List(built.split_off(built.len() - items.len())),
                        Ast::Tuple(items) => Ast::Tuple(built.split_off(built.len() - items.len())),
                        Ast::Form(form) => {
                            let args = form
                                .args
                                .as_ref()
                                .map(|args| built.split_off(built.len() - args.len()));
                            let head = match &form.head {
                                Head::Atom(name) => Head::Atom(name.clone()),
                                Head::Expr(_) => match built.pop() {
                                    Some(head) => Head::Expr(head),
                                    None => continue,
                                },
                            };
                            Ast::Form(Box::new(Form {
                                head,
                                meta: form.meta.clone(),
                                args,
                            }))
                        }
                        scalar => scalar.clone(),
                    };
                    built.push(assembled);
                }
            }
        }
        built.pop().unwrap_or(Ast::Atom(String::new()))
    }
}

impl Drop for Form {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(ast) = pending.pop() {
            match ast {
                Ast::Form(mut form) => form.detach_children(&mut pending),
                Ast::List(items) | Ast::Tuple(items) => pending.extend(items),
                _ => {}
            }
        }
    }
}

impl Ast {
    // ------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------

    pub fn int(value: i64) -> Self {
        Ast::Integer(value)
    }

    pub fn float(value: f64) -> Self {
        Ast::Float(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Ast::String(value.into())
    }

    pub fn atom(value: impl Into<String>) -> Self {
        Ast::Atom(value.into())
    }

    pub fn list(items: Vec<Ast>) -> Self {
        Ast::List(items)
    }

    pub fn tuple(items: Vec<Ast>) -> Self {
        Ast::Tuple(items)
    }

    /// Variable reference (`x`, `_`, `_ignored`, `__MODULE__`)
    pub fn var(name: impl Into<String>) -> Self {
        Ast::Form(Box::new(Form {
            head: Head::Atom(name.into()),
            meta: Meta::default(),
            args: None,
        }))
    }

    /// Form with an atom head and arguments (local calls, operators, special forms)
    pub fn call(name: impl Into<String>, args: Vec<Ast>) -> Self {
        Ast::Form(Box::new(Form {
            head: Head::Atom(name.into()),
            meta: Meta::default(),
            args: Some(args),
        }))
    }

    /// Binary operator form
    pub fn op(symbol: &str, left: Ast, right: Ast) -> Self {
        Ast::call(symbol, vec![left, right])
    }

    /// Unary operator form
    pub fn unary(symbol: &str, operand: Ast) -> Self {
        Ast::call(symbol, vec![operand])
    }

    /// Module alias: `A.B` → `{:__aliases__, _, [:A, :B]}`
    pub fn aliases(segments: &[&str]) -> Self {
        Ast::call(
            "__aliases__",
            segments.iter().map(|s| Ast::atom(*s)).collect(),
        )
    }

    /// Remote call: `module.function(args)`
    pub fn remote(module: Ast, function: &str, args: Vec<Ast>) -> Self {
        let dot = Ast::call(".", vec![module, Ast::atom(function)]);
        Ast::Form(Box::new(Form {
            head: Head::Expr(dot),
            meta: Meta::default(),
            args: Some(args),
        }))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn as_form(&self) -> Option<&Form> {
        match self {
            Ast::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Ast::Atom(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Ast::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Variable name if this is a variable reference
    pub fn as_variable(&self) -> Option<&str> {
        self.as_form()
            .filter(|f| f.is_variable())
            .and_then(Form::name)
    }

    /// Dotted module name for an alias form or a plain atom module (`:ets`)
    pub fn module_name(&self) -> Option<String> {
        match self {
            Ast::Atom(name) => Some(name.clone()),
            Ast::Form(form) if form.is_named("__aliases__") => {
                let segments: Option<Vec<&str>> = form.args().iter().map(Ast::as_atom).collect();
                segments
                    .filter(|s| !s.is_empty())
                    .map(|s| s.join("."))
            }
            _ => None,
        }
    }

    /// Whether any node sits more than `limit` levels below this one
    pub fn exceeds_depth(&self, limit: usize) -> bool {
        let mut pending = vec![(self, 0usize)];
        while let Some((ast, depth)) = pending.pop() {
            if depth > limit {
                return true;
            }
            let children: &[Ast] = match ast {
                Ast::List(items) | Ast::Tuple(items) => items,
                Ast::Form(form) => {
                    if let Head::Expr(head) = &form.head {
                        pending.push((head, depth + 1));
                    }
                    form.args()
                }
                _ => &[],
            };
            pending.extend(children.iter().map(|child| (child, depth + 1)));
        }
        false
    }

    /// Line from metadata, if any
    pub fn line(&self) -> Option<u32> {
        self.as_form().and_then(|f| f.meta.line)
    }
}
