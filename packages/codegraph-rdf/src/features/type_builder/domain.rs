//! Type expression shapes

use crate::shared::models::Ast;
use crate::shared::vocab::structure;

#[derive(Debug, Clone, PartialEq)]
pub enum TypeShape<'a> {
    /// Flattened `a | b | c`
    Union(Vec<&'a Ast>),
    Tuple(&'a [Ast]),
    /// `(params -> return)`
    Function {
        params: &'a [Ast],
        ret: &'a Ast,
    },
    /// `list(t)`, `keyword(v)`, `[t]` (as `list`)
    Parameterized {
        name: &'a str,
        args: Vec<&'a Ast>,
    },
    /// `String.t()`, `Enumerable.t(a)`
    Remote {
        module: String,
        name: &'a str,
        args: &'a [Ast],
    },
    Variable(&'a str),
    /// Zero-argument local type: `integer()`, `t()`
    Basic(&'a str),
    /// Atom or integer literal type, in lexical form
    Literal(String),
    Map(Vec<(&'a Ast, &'a Ast)>),
    Generic {
        form_name: Option<&'a str>,
    },
}

impl TypeShape<'_> {
    pub fn class_iri(&self) -> &'static str {
        match self {
            TypeShape::Union(_) => structure::UNION_TYPE,
            TypeShape::Tuple(_) => structure::TUPLE_TYPE,
            TypeShape::Function { .. } => structure::FUNCTION_TYPE,
            TypeShape::Parameterized { .. } => structure::PARAMETERIZED_TYPE,
            TypeShape::Remote { .. } => structure::REMOTE_TYPE,
            TypeShape::Variable(_) => structure::TYPE_VARIABLE,
            TypeShape::Basic(_) => structure::BASIC_TYPE,
            TypeShape::Literal(_) => structure::LITERAL_TYPE,
            TypeShape::Map(_) => structure::MAP_TYPE,
            TypeShape::Generic { .. } => structure::TYPE_EXPRESSION,
        }
    }
}
