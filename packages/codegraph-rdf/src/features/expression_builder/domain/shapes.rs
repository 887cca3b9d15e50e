//! Construct families
//!
//! Classification maps a raw [`Ast`] onto exactly one variant of these enums;
//! emission matches on them exhaustively. Shapes borrow from the tree they
//! were classified from.

use crate::shared::models::Ast;
use crate::shared::vocab::core;

/// Scalar literal values
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralShape<'a> {
    Integer(i64),
    Float(f64),
    String(&'a str),
    Atom(&'a str),
    Boolean(bool),
    Nil,
    /// `A.B` alias or resolved `__MODULE__`, as a dotted name
    ModuleAlias(String),
}

impl LiteralShape<'_> {
    /// Class in expression context
    pub fn class_iri(&self) -> &'static str {
        match self {
            LiteralShape::Integer(_) => core::INTEGER_LITERAL,
            LiteralShape::Float(_) => core::FLOAT_LITERAL,
            LiteralShape::String(_) => core::STRING_LITERAL,
            LiteralShape::Atom(_) | LiteralShape::ModuleAlias(_) => core::ATOM_LITERAL,
            LiteralShape::Boolean(_) => core::BOOLEAN_LITERAL,
            LiteralShape::Nil => core::NIL_LITERAL,
        }
    }
}

/// List sub-shapes, checked in this order
#[derive(Debug, Clone, PartialEq)]
pub enum ListShape<'a> {
    /// Every element a valid character code, no tail (includes `[]`)
    Charlist(String),
    /// Every element a `{atom, value}` pair
    Keyword(Vec<(&'a str, &'a Ast)>),
    Plain {
        elements: Vec<&'a Ast>,
        tail: Option<&'a Ast>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    Comparison,
    Logical,
    Arithmetic,
    StringConcat,
    List,
    Pipe,
    Match,
    In,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorArity {
    Unary,
    Binary,
}

impl OperatorClass {
    /// Symbol table lookup; arity matters for `+`, `-`, `not` and `!`
    pub fn from_symbol(symbol: &str, arity: OperatorArity) -> Option<Self> {
        use OperatorArity::*;
        match (symbol, arity) {
            ("==" | "!=" | "===" | "!==" | "<" | ">" | "<=" | ">=", Binary) => {
                Some(OperatorClass::Comparison)
            }
            ("and" | "or" | "&&" | "||", Binary) => Some(OperatorClass::Logical),
            ("not" | "!", Unary) => Some(OperatorClass::Logical),
            ("+" | "-" | "*" | "/", Binary) => Some(OperatorClass::Arithmetic),
            ("+" | "-", Unary) => Some(OperatorClass::Arithmetic),
            ("<>", Binary) => Some(OperatorClass::StringConcat),
            ("++" | "--", Binary) => Some(OperatorClass::List),
            ("|>", Binary) => Some(OperatorClass::Pipe),
            ("=", Binary) => Some(OperatorClass::Match),
            ("in", Binary) => Some(OperatorClass::In),
            _ => None,
        }
    }

    pub fn class_iri(&self) -> &'static str {
        match self {
            OperatorClass::Comparison => core::COMPARISON_OPERATOR,
            OperatorClass::Logical => core::LOGICAL_OPERATOR,
            OperatorClass::Arithmetic => core::ARITHMETIC_OPERATOR,
            OperatorClass::StringConcat => core::STRING_CONCAT_OPERATOR,
            OperatorClass::List => core::LIST_OPERATOR,
            OperatorClass::Pipe => core::PIPE_OPERATOR,
            OperatorClass::Match => core::MATCH_OPERATOR,
            OperatorClass::In => core::IN_OPERATOR,
        }
    }
}

/// `&` sub-shapes; the attributes of each never overlap
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureShape<'a> {
    /// `&1`
    Index(i64),
    /// `&fun/2`, `&Mod.fun/2`
    Function {
        module: Option<String>,
        name: &'a str,
        arity: i64,
    },
    /// `&(&1 + 1)`
    Expression(&'a Ast),
}

/// Expression-context classification
#[derive(Debug, Clone, PartialEq)]
pub enum ExprShape<'a> {
    Literal(LiteralShape<'a>),
    Binary(Vec<u8>),
    List(ListShape<'a>),
    Tuple(&'a [Ast]),
    Map(Vec<(&'a Ast, &'a Ast)>),
    Struct {
        module: Option<String>,
        entries: Vec<(&'a Ast, &'a Ast)>,
    },
    Range {
        start: &'a Ast,
        end: &'a Ast,
        step: Option<&'a Ast>,
    },
    Sigil {
        sigil: &'a str,
        content: String,
        modifiers: String,
    },
    UnaryOperator {
        class: OperatorClass,
        symbol: &'a str,
        operand: &'a Ast,
    },
    BinaryOperator {
        class: OperatorClass,
        symbol: &'a str,
        left: &'a Ast,
        right: &'a Ast,
    },
    Capture(CaptureShape<'a>),
    Variable(&'a str),
    Wildcard,
    Conditional {
        negated: bool,
        condition: &'a Ast,
        then_branch: Option<&'a Ast>,
        else_branch: Option<&'a Ast>,
    },
    Block(&'a [Ast]),
    LocalCall {
        name: &'a str,
        args: &'a [Ast],
    },
    RemoteCall {
        module: Option<String>,
        receiver: &'a Ast,
        function: &'a str,
        args: &'a [Ast],
    },
    Generic {
        form_name: Option<&'a str>,
    },
}

/// Pattern-context classification
#[derive(Debug, Clone, PartialEq)]
pub enum PatternShape<'a> {
    Literal(LiteralShape<'a>),
    Variable(&'a str),
    Wildcard,
    Pin(&'a Ast),
    Tuple(&'a [Ast]),
    List {
        elements: Vec<&'a Ast>,
        tail: Option<&'a Ast>,
    },
    Map(Vec<(&'a Ast, &'a Ast)>),
    Struct {
        module: Option<String>,
        entries: Vec<(&'a Ast, &'a Ast)>,
    },
    Binary(Vec<&'a Ast>),
    /// `pattern = other` binds while matching
    As {
        left: &'a Ast,
        right: &'a Ast,
    },
    Generic {
        form_name: Option<&'a str>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unary_minus_is_arithmetic() {
        assert_eq!(
            OperatorClass::from_symbol("-", OperatorArity::Unary),
            Some(OperatorClass::Arithmetic)
        );
        assert_eq!(
            OperatorClass::from_symbol("not", OperatorArity::Unary),
            Some(OperatorClass::Logical)
        );
    }

    #[test]
    fn test_arity_mismatch_is_unknown() {
        assert_eq!(OperatorClass::from_symbol("*", OperatorArity::Unary), None);
        assert_eq!(OperatorClass::from_symbol("not", OperatorArity::Binary), None);
        assert_eq!(OperatorClass::from_symbol("<~>", OperatorArity::Binary), None);
    }

    #[test]
    fn test_symbol_table() {
        let cases = [
            ("===", OperatorClass::Comparison),
            ("||", OperatorClass::Logical),
            ("/", OperatorClass::Arithmetic),
            ("<>", OperatorClass::StringConcat),
            ("--", OperatorClass::List),
            ("|>", OperatorClass::Pipe),
            ("=", OperatorClass::Match),
            ("in", OperatorClass::In),
        ];
        for (symbol, class) in cases {
            assert_eq!(
                OperatorClass::from_symbol(symbol, OperatorArity::Binary),
                Some(class),
                "symbol {}",
                symbol
            );
        }
    }
}
