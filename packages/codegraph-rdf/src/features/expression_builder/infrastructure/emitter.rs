//! Recursive triple emission
//!
//! The root identifier is minted by the caller; every nested node is
//! addressed by `fresh_iri(parent, role)`, so emission itself never touches
//! counters and needs only the base namespace and the current module.
//! Descent stops at [`MAX_NESTING_DEPTH`]; the node there is generic.

use tracing::trace;

use super::classify::{classify_expression, classify_pattern};
use crate::features::expression_builder::domain::{
    CaptureShape, ExprShape, ListShape, LiteralShape, OperatorClass, PatternShape,
};
use crate::shared::models::{Ast, Form, Iri, Literal, TripleSet, MAX_NESTING_DEPTH};
use crate::shared::utils::id_generator::{fresh_iri, IriGenerator};
use crate::shared::vocab::core;

type ChildBuilder<'c> = fn(&mut Emitter<'c>, &Iri, &Ast);

pub struct Emitter<'c> {
    base_iri: &'c str,
    current_module: Option<&'c str>,
    triples: TripleSet,
    depth: usize,
}

impl<'c> Emitter<'c> {
    pub fn new(base_iri: &'c str, current_module: Option<&'c str>) -> Self {
        Self {
            base_iri,
            current_module,
            triples: TripleSet::new(),
            depth: 0,
        }
    }

    pub fn finish(self) -> TripleSet {
        self.triples
    }

    // ============================================================
    // Expression context
    // ============================================================

    pub fn expression(&mut self, iri: &Iri, ast: &Ast) {
        if self.depth >= MAX_NESTING_DEPTH {
            return self.truncated(iri, ast, core::EXPRESSION);
        }
        match classify_expression(ast, self.current_module) {
            ExprShape::Literal(literal) => {
                self.triples.add_type(iri, literal.class_iri());
                self.literal_value(iri, &literal);
            }
            ExprShape::Binary(bytes) => {
                self.triples.add_type(iri, core::BINARY_LITERAL);
                self.triples
                    .add_literal(iri, core::BINARY_VALUE, Literal::hex_binary(&bytes));
            }
            ExprShape::List(ListShape::Charlist(text)) => {
                self.triples.add_type(iri, core::CHARLIST_LITERAL);
                self.triples
                    .add_literal(iri, core::CHARLIST_VALUE, Literal::string(text));
            }
            ExprShape::List(ListShape::Keyword(pairs)) => {
                self.triples.add_type(iri, core::KEYWORD_LIST_LITERAL);
                let keys: Vec<Ast> = pairs.iter().map(|(key, _)| Ast::atom(*key)).collect();
                let entries: Vec<(&Ast, &Ast)> = keys
                    .iter()
                    .zip(pairs.iter().map(|(_, value)| *value))
                    .collect();
                self.entries(iri, &entries, Self::expression, Self::expression);
            }
            ExprShape::List(ListShape::Plain { elements, tail }) => {
                self.triples.add_type(iri, core::LIST_LITERAL);
                self.elements(iri, &elements, Self::expression);
                if let Some(tail) = tail {
                    self.child(iri, "tail", core::HAS_TAIL, tail, Self::expression);
                }
            }
            ExprShape::Tuple(items) => {
                self.triples.add_type(iri, core::TUPLE_LITERAL);
                let elements: Vec<&Ast> = items.iter().collect();
                self.elements(iri, &elements, Self::expression);
            }
            ExprShape::Map(entries) => {
                self.triples.add_type(iri, core::MAP_LITERAL);
                self.entries(iri, &entries, Self::expression, Self::expression);
            }
            ExprShape::Struct { module, entries } => {
                self.triples.add_type(iri, core::STRUCT_LITERAL);
                self.struct_module(iri, module.as_deref());
                self.entries(iri, &entries, Self::expression, Self::expression);
            }
            ExprShape::Range { start, end, step } => {
                self.triples.add_type(iri, core::RANGE_LITERAL);
                self.child(iri, "start", core::RANGE_START, start, Self::expression);
                self.child(iri, "end", core::RANGE_END, end, Self::expression);
                if let Some(step) = step {
                    self.child(iri, "step", core::RANGE_STEP, step, Self::expression);
                }
            }
            ExprShape::Sigil {
                sigil,
                content,
                modifiers,
            } => {
                self.triples.add_type(iri, core::SIGIL_LITERAL);
                self.triples
                    .add_literal(iri, core::SIGIL_CHAR, Literal::string(sigil));
                self.triples
                    .add_literal(iri, core::SIGIL_CONTENT, Literal::string(content));
                if !modifiers.is_empty() {
                    self.triples
                        .add_literal(iri, core::SIGIL_MODIFIERS, Literal::string(modifiers));
                }
            }
            ExprShape::UnaryOperator {
                class,
                symbol,
                operand,
            } => {
                self.operator_node(iri, class, symbol);
                self.child(iri, "operand", core::HAS_OPERAND, operand, Self::expression);
            }
            ExprShape::BinaryOperator {
                class,
                symbol,
                left,
                right,
            } => {
                self.operator_node(iri, class, symbol);
                let left_builder: ChildBuilder<'c> = match class {
                    OperatorClass::Match => Self::pattern,
                    _ => Self::expression,
                };
                self.child(iri, "left", core::HAS_LEFT_OPERAND, left, left_builder);
                self.child(iri, "right", core::HAS_RIGHT_OPERAND, right, Self::expression);
            }
            ExprShape::Capture(capture) => self.capture(iri, capture),
            ExprShape::Variable(name) => {
                self.triples.add_type(iri, core::VARIABLE);
                self.triples.add_literal(iri, core::NAME, Literal::string(name));
            }
            ExprShape::Wildcard => self.triples.add_type(iri, core::WILDCARD),
            ExprShape::Conditional {
                negated,
                condition,
                then_branch,
                else_branch,
            } => {
                let class = if negated {
                    core::UNLESS_EXPRESSION
                } else {
                    core::IF_EXPRESSION
                };
                self.triples.add_type(iri, class);
                self.child(iri, "condition", core::HAS_CONDITION, condition, Self::expression);
                if let Some(then_branch) = then_branch {
                    self.child(iri, "then", core::HAS_THEN_BRANCH, then_branch, Self::expression);
                }
                if let Some(else_branch) = else_branch {
                    self.child(iri, "else", core::HAS_ELSE_BRANCH, else_branch, Self::expression);
                }
            }
            ExprShape::Block(statements) => {
                self.triples.add_type(iri, core::BLOCK);
                for (i, statement) in statements.iter().enumerate() {
                    let role = format!("statement_{}", i);
                    self.child(iri, &role, core::HAS_STATEMENT, statement, Self::expression);
                }
            }
            ExprShape::LocalCall { name, args } => {
                self.triples.add_type(iri, core::LOCAL_CALL);
                self.triples
                    .add_literal(iri, core::FUNCTION_NAME, Literal::string(name));
                self.arguments(iri, args);
            }
            ExprShape::RemoteCall {
                module,
                receiver,
                function,
                args,
            } => {
                self.triples.add_type(iri, core::REMOTE_CALL);
                match module {
                    Some(module) => {
                        let module_iri = IriGenerator::module(self.base_iri, &module);
                        self.triples
                            .add_literal(iri, core::MODULE_NAME, Literal::string(module));
                        self.triples.add_iri(iri, core::REFERS_TO_MODULE, &module_iri);
                    }
                    None => {
                        self.child(iri, "receiver", core::HAS_RECEIVER, receiver, Self::expression)
                    }
                }
                self.triples
                    .add_literal(iri, core::FUNCTION_NAME, Literal::string(function));
                self.arguments(iri, args);
            }
            ExprShape::Generic { form_name } => {
                trace!("generic expression node: {} ({:?})", iri, form_name);
                self.triples.add_type(iri, core::EXPRESSION);
                self.form_name(iri, form_name);
            }
        }
    }

    // ============================================================
    // Pattern context
    // ============================================================

    pub fn pattern(&mut self, iri: &Iri, ast: &Ast) {
        if self.depth >= MAX_NESTING_DEPTH {
            return self.truncated(iri, ast, core::PATTERN);
        }
        match classify_pattern(ast, self.current_module) {
            PatternShape::Literal(literal) => {
                self.triples.add_type(iri, core::LITERAL_PATTERN);
                match literal {
                    LiteralShape::Nil => {
                        self.triples
                            .add_literal(iri, core::ATOM_VALUE, Literal::string("nil"))
                    }
                    other => self.literal_value(iri, &other),
                }
            }
            PatternShape::Variable(name) => {
                self.triples.add_type(iri, core::VARIABLE_PATTERN);
                self.triples.add_literal(iri, core::NAME, Literal::string(name));
            }
            PatternShape::Wildcard => self.triples.add_type(iri, core::WILDCARD_PATTERN),
            PatternShape::Pin(pinned) => {
                self.triples.add_type(iri, core::PIN_PATTERN);
                if let Some(name) = pinned.as_variable() {
                    self.triples.add_literal(iri, core::NAME, Literal::string(name));
                }
                self.child(iri, "operand", core::HAS_OPERAND, pinned, Self::expression);
            }
            PatternShape::Tuple(items) => {
                self.triples.add_type(iri, core::TUPLE_PATTERN);
                let elements: Vec<&Ast> = items.iter().collect();
                self.elements(iri, &elements, Self::pattern);
            }
            PatternShape::List { elements, tail } => {
                self.triples.add_type(iri, core::LIST_PATTERN);
                self.elements(iri, &elements, Self::pattern);
                if let Some(tail) = tail {
                    self.child(iri, "tail", core::HAS_TAIL, tail, Self::pattern);
                }
            }
            PatternShape::Map(entries) => {
                self.triples.add_type(iri, core::MAP_PATTERN);
                self.entries(iri, &entries, Self::pattern, Self::pattern);
            }
            PatternShape::Struct { module, entries } => {
                self.triples.add_type(iri, core::STRUCT_PATTERN);
                self.struct_module(iri, module.as_deref());
                self.entries(iri, &entries, Self::pattern, Self::pattern);
            }
            PatternShape::Binary(segments) => {
                self.triples.add_type(iri, core::BINARY_PATTERN);
                for (i, segment) in segments.iter().enumerate() {
                    let role = format!("segment_{}", i);
                    self.child(iri, &role, core::HAS_SEGMENT, segment, Self::pattern);
                }
            }
            PatternShape::As { left, right } => {
                self.triples.add_type(iri, core::AS_PATTERN);
                self.child(iri, "left", core::HAS_LEFT_OPERAND, left, Self::pattern);
                self.child(iri, "right", core::HAS_RIGHT_OPERAND, right, Self::pattern);
            }
            PatternShape::Generic { form_name } => {
                trace!("generic pattern node: {} ({:?})", iri, form_name);
                self.triples.add_type(iri, core::PATTERN);
                self.form_name(iri, form_name);
            }
        }
    }

    // ============================================================
    // Helpers
    // ============================================================

    fn child(
        &mut self,
        parent: &Iri,
        role: &str,
        predicate: &str,
        ast: &Ast,
        build: ChildBuilder<'c>,
    ) {
        let child = fresh_iri(parent, role);
        self.triples.add_iri(parent, predicate, &child);
        self.depth += 1;
        build(self, &child, ast);
        self.depth -= 1;
    }

    fn truncated(&mut self, iri: &Iri, ast: &Ast, class: &str) {
        trace!("nesting bound reached at {}", iri);
        self.triples.add_type(iri, class);
        self.form_name(iri, ast.as_form().and_then(Form::name));
    }

    fn elements(&mut self, parent: &Iri, elements: &[&Ast], build: ChildBuilder<'c>) {
        for (i, element) in elements.iter().enumerate() {
            let role = format!("element_{}", i);
            self.child(parent, &role, core::HAS_ELEMENT, element, build);
        }
        self.triples
            .add_literal(parent, core::ELEMENT_COUNT, Literal::count(elements.len()));
    }

    fn entries(
        &mut self,
        parent: &Iri,
        entries: &[(&Ast, &Ast)],
        build_key: ChildBuilder<'c>,
        build_value: ChildBuilder<'c>,
    ) {
        for (i, (key, value)) in entries.iter().enumerate() {
            let entry = fresh_iri(parent, &format!("entry_{}", i));
            self.triples.add_iri(parent, core::HAS_ENTRY, &entry);
            self.triples.add_type(&entry, core::MAP_ENTRY);
            self.child(&entry, "key", core::HAS_KEY, key, build_key);
            self.child(&entry, "value", core::HAS_VALUE, value, build_value);
        }
        self.triples
            .add_literal(parent, core::ELEMENT_COUNT, Literal::count(entries.len()));
    }

    fn arguments(&mut self, call: &Iri, args: &[Ast]) {
        self.triples
            .add_literal(call, core::ARITY, Literal::count(args.len()));
        for (i, arg) in args.iter().enumerate() {
            let role = format!("arg_{}", i);
            self.child(call, &role, core::HAS_ARGUMENT, arg, Self::expression);
        }
    }

    fn literal_value(&mut self, iri: &Iri, literal: &LiteralShape<'_>) {
        match literal {
            LiteralShape::Integer(n) => {
                self.triples
                    .add_literal(iri, core::INTEGER_VALUE, Literal::integer(*n))
            }
            LiteralShape::Float(f) => {
                self.triples
                    .add_literal(iri, core::FLOAT_VALUE, Literal::double(*f))
            }
            LiteralShape::String(s) => {
                self.triples
                    .add_literal(iri, core::STRING_VALUE, Literal::string(*s))
            }
            LiteralShape::Atom(name) => {
                self.triples
                    .add_literal(iri, core::ATOM_VALUE, Literal::string(*name))
            }
            LiteralShape::Boolean(b) => {
                self.triples
                    .add_literal(iri, core::BOOLEAN_VALUE, Literal::boolean(*b))
            }
            LiteralShape::Nil => {}
            LiteralShape::ModuleAlias(name) => {
                let module_iri = IriGenerator::module(self.base_iri, name);
                self.triples
                    .add_literal(iri, core::ATOM_VALUE, Literal::string(name.as_str()));
                self.triples.add_iri(iri, core::REFERS_TO_MODULE, &module_iri);
            }
        }
    }

    fn operator_node(&mut self, iri: &Iri, class: OperatorClass, symbol: &str) {
        self.triples.add_type(iri, class.class_iri());
        self.triples
            .add_literal(iri, core::OPERATOR_SYMBOL, Literal::string(symbol));
    }

    fn capture(&mut self, iri: &Iri, capture: CaptureShape<'_>) {
        self.triples.add_type(iri, core::CAPTURE_OPERATOR);
        self.triples
            .add_literal(iri, core::OPERATOR_SYMBOL, Literal::string("&"));
        match capture {
            CaptureShape::Index(index) => {
                self.triples
                    .add_literal(iri, core::CAPTURE_INDEX, Literal::integer(index));
            }
            CaptureShape::Function {
                module,
                name,
                arity,
            } => {
                if let Some(module) = module {
                    self.triples
                        .add_literal(iri, core::CAPTURE_MODULE_NAME, Literal::string(module));
                }
                self.triples
                    .add_literal(iri, core::CAPTURE_FUNCTION_NAME, Literal::string(name));
                self.triples
                    .add_literal(iri, core::CAPTURE_ARITY, Literal::integer(arity));
            }
            CaptureShape::Expression(body) => {
                self.child(iri, "operand", core::HAS_OPERAND, body, Self::expression);
            }
        }
    }

    fn struct_module(&mut self, iri: &Iri, module: Option<&str>) {
        if let Some(module) = module {
            let module_iri = IriGenerator::module(self.base_iri, module);
            self.triples
                .add_literal(iri, core::STRUCT_MODULE_NAME, Literal::string(module));
            self.triples.add_iri(iri, core::REFERS_TO_MODULE, &module_iri);
        }
    }

    fn form_name(&mut self, iri: &Iri, form_name: Option<&str>) {
        if let Some(name) = form_name {
            self.triples
                .add_literal(iri, core::FORM_NAME, Literal::string(name));
        }
    }
}
