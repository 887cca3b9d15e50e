//! Shape classification
//!
//! Total, ordered dispatch from a raw tree to one shape variant. Nothing here
//! fails: anything unrecognized becomes the generic shape of its context.

use crate::features::expression_builder::domain::{
    CaptureShape, ExprShape, ListShape, LiteralShape, OperatorArity, OperatorClass, PatternShape,
};
use crate::shared::models::{Ast, Form, Head};

/// Named forms that never classify as local calls
const SPECIAL_FORMS: &[&str] = &[
    "case",
    "cond",
    "fn",
    "with",
    "for",
    "try",
    "receive",
    "quote",
    "unquote",
    "unquote_splicing",
    "super",
    "if",
    "unless",
    "when",
    "->",
    "@",
    "::",
    "|",
    ".",
    "^",
    "&",
    "{}",
    "%{}",
    "%",
    "<<>>",
    "__aliases__",
];

// ============================================================
// Expression context
// ============================================================

pub fn classify_expression<'a>(ast: &'a Ast, current_module: Option<&str>) -> ExprShape<'a> {
    match ast {
        Ast::Integer(n) => ExprShape::Literal(LiteralShape::Integer(*n)),
        Ast::Float(f) => ExprShape::Literal(LiteralShape::Float(*f)),
        Ast::String(s) => ExprShape::Literal(LiteralShape::String(s)),
        Ast::Atom(name) => ExprShape::Literal(atom_literal(name)),
        Ast::List(items) => ExprShape::List(classify_list(items)),
        Ast::Tuple(items) => ExprShape::Tuple(items),
        Ast::Form(form) => classify_expression_form(form, current_module),
    }
}

fn classify_expression_form<'a>(form: &'a Form, current_module: Option<&str>) -> ExprShape<'a> {
    let name = match &form.head {
        Head::Atom(name) => name.as_str(),
        Head::Expr(head) => return classify_remote(head, form.args(), current_module),
    };

    let Some(args) = form.args.as_deref() else {
        return match (name, current_module) {
            ("_", _) => ExprShape::Wildcard,
            ("__MODULE__", Some(module)) => {
                ExprShape::Literal(LiteralShape::ModuleAlias(module.to_string()))
            }
            _ => ExprShape::Variable(name),
        };
    };

    let shape = match name {
        "__aliases__" => alias_name(args).map(|n| ExprShape::Literal(LiteralShape::ModuleAlias(n))),
        "{}" => Some(ExprShape::Tuple(args)),
        "%{}" => map_entries(args).map(ExprShape::Map),
        "%" => struct_parts(args, current_module)
            .map(|(module, entries)| ExprShape::Struct { module, entries }),
        "<<>>" => binary_bytes(args).map(ExprShape::Binary),
        ".." => match args {
            [start, end] => Some(ExprShape::Range {
                start,
                end,
                step: None,
            }),
            _ => None,
        },
        "..//" => match args {
            [start, end, step] => Some(ExprShape::Range {
                start,
                end,
                step: Some(step),
            }),
            _ => None,
        },
        "&" => match args {
            [body] => Some(ExprShape::Capture(classify_capture(body))),
            _ => None,
        },
        "if" => conditional(false, args),
        "unless" => conditional(true, args),
        "__block__" => Some(ExprShape::Block(args)),
        _ => None,
    };

    shape
        .or_else(|| sigil(name, args))
        .or_else(|| operator(name, args))
        .unwrap_or_else(|| {
            if SPECIAL_FORMS.contains(&name) {
                ExprShape::Generic {
                    form_name: Some(name),
                }
            } else {
                ExprShape::LocalCall { name, args }
            }
        })
}

fn classify_remote<'a>(
    head: &'a Ast,
    args: &'a [Ast],
    current_module: Option<&str>,
) -> ExprShape<'a> {
    let dot = match head.as_form().filter(|f| f.is_named(".")) {
        Some(dot) => dot,
        None => return ExprShape::Generic { form_name: None },
    };
    match dot.args() {
        [receiver, Ast::Atom(function)] => ExprShape::RemoteCall {
            module: module_of(receiver, current_module),
            receiver,
            function: function.as_str(),
            args,
        },
        _ => ExprShape::Generic { form_name: None },
    }
}

fn classify_list(items: &[Ast]) -> ListShape<'_> {
    let (elements, tail) = split_tail(items);
    if tail.is_none() {
        if let Some(text) = charlist_text(items) {
            return ListShape::Charlist(text);
        }
        if let Some(pairs) = keyword_pairs(items) {
            return ListShape::Keyword(pairs);
        }
    }
    ListShape::Plain { elements, tail }
}

fn classify_capture(body: &Ast) -> CaptureShape<'_> {
    if let Ast::Integer(index) = body {
        return CaptureShape::Index(*index);
    }
    if let Some([target, Ast::Integer(arity)]) = body
        .as_form()
        .filter(|f| f.is_named("/"))
        .map(Form::args)
    {
        if let Some((module, name)) = capture_target(target) {
            return CaptureShape::Function {
                module,
                name,
                arity: *arity,
            };
        }
    }
    CaptureShape::Expression(body)
}

/// `fun` or `Mod.fun` on the left of `/` inside a capture
fn capture_target(target: &Ast) -> Option<(Option<String>, &str)> {
    let form = target.as_form()?;
    match &form.head {
        Head::Atom(name) if form.args().is_empty() => Some((None, name.as_str())),
        Head::Expr(head) => {
            let dot = head.as_form().filter(|f| f.is_named("."))?;
            match dot.args() {
                [module, Ast::Atom(function)] => {
                    Some((Some(module.module_name()?), function.as_str()))
                }
                _ => None,
            }
        }
        Head::Atom(_) => None,
    }
}

/// `if cond, do: a, else: b` (block syntax arrives as the same keyword list)
fn conditional(negated: bool, args: &[Ast]) -> Option<ExprShape<'_>> {
    let [condition, Ast::List(clauses)] = args else {
        return None;
    };
    let mut then_branch = None;
    let mut else_branch = None;
    for clause in clauses {
        let Ast::Tuple(pair) = clause else {
            return None;
        };
        match pair.as_slice() {
            [Ast::Atom(key), value] if key == "do" => then_branch = Some(value),
            [Ast::Atom(key), value] if key == "else" => else_branch = Some(value),
            _ => return None,
        }
    }
    Some(ExprShape::Conditional {
        negated,
        condition,
        then_branch,
        else_branch,
    })
}

fn sigil<'a>(name: &'a str, args: &'a [Ast]) -> Option<ExprShape<'a>> {
    let sigil = name.strip_prefix("sigil_").filter(|s| !s.is_empty())?;
    let [content, Ast::List(modifiers)] = args else {
        return None;
    };
    let parts = content.as_form().filter(|f| f.is_named("<<>>"))?;
    let content = parts
        .args()
        .iter()
        .map(|part| match part {
            Ast::String(s) => Some(s.as_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?
        .concat();
    Some(ExprShape::Sigil {
        sigil,
        content,
        modifiers: charlist_text(modifiers)?,
    })
}

fn operator<'a>(symbol: &'a str, args: &'a [Ast]) -> Option<ExprShape<'a>> {
    match args {
        [operand] => OperatorClass::from_symbol(symbol, OperatorArity::Unary).map(|class| {
            ExprShape::UnaryOperator {
                class,
                symbol,
                operand,
            }
        }),
        [left, right] => OperatorClass::from_symbol(symbol, OperatorArity::Binary).map(|class| {
            ExprShape::BinaryOperator {
                class,
                symbol,
                left,
                right,
            }
        }),
        _ => None,
    }
}

// ============================================================
// Pattern context
// ============================================================

pub fn classify_pattern<'a>(ast: &'a Ast, current_module: Option<&str>) -> PatternShape<'a> {
    match ast {
        Ast::Integer(n) => PatternShape::Literal(LiteralShape::Integer(*n)),
        Ast::Float(f) => PatternShape::Literal(LiteralShape::Float(*f)),
        Ast::String(s) => PatternShape::Literal(LiteralShape::String(s)),
        Ast::Atom(name) => PatternShape::Literal(atom_literal(name)),
        Ast::List(items) => {
            let (elements, tail) = split_tail(items);
            PatternShape::List { elements, tail }
        }
        Ast::Tuple(items) => PatternShape::Tuple(items),
        Ast::Form(form) => classify_pattern_form(form, current_module),
    }
}

fn classify_pattern_form<'a>(form: &'a Form, current_module: Option<&str>) -> PatternShape<'a> {
    let Head::Atom(name) = &form.head else {
        return PatternShape::Generic { form_name: None };
    };
    let name = name.as_str();

    let Some(args) = form.args.as_deref() else {
        return match (name, current_module) {
            ("_", _) => PatternShape::Wildcard,
            ("__MODULE__", Some(module)) => {
                PatternShape::Literal(LiteralShape::ModuleAlias(module.to_string()))
            }
            _ => PatternShape::Variable(name),
        };
    };

    let shape = match (name, args) {
        ("^", [pinned]) => Some(PatternShape::Pin(pinned)),
        ("=", [left, right]) => Some(PatternShape::As { left, right }),
        ("{}", _) => Some(PatternShape::Tuple(args)),
        ("%{}", _) => map_entries(args).map(PatternShape::Map),
        ("%", _) => struct_parts(args, current_module)
            .map(|(module, entries)| PatternShape::Struct { module, entries }),
        ("<<>>", _) => Some(PatternShape::Binary(args.iter().map(segment_value).collect())),
        ("__aliases__", _) => {
            alias_name(args).map(|n| PatternShape::Literal(LiteralShape::ModuleAlias(n)))
        }
        ("-", [Ast::Integer(n)]) => n
            .checked_neg()
            .map(|n| PatternShape::Literal(LiteralShape::Integer(n))),
        ("-", [Ast::Float(f)]) => Some(PatternShape::Literal(LiteralShape::Float(-f))),
        _ => None,
    };

    shape.unwrap_or(PatternShape::Generic {
        form_name: Some(name),
    })
}

/// Value part of a `value::type` binary segment
fn segment_value(segment: &Ast) -> &Ast {
    match segment
        .as_form()
        .filter(|f| f.is_named("::"))
        .map(Form::args)
    {
        Some([value, _]) => value,
        _ => segment,
    }
}

// ============================================================
// Shared helpers
// ============================================================

fn atom_literal(name: &str) -> LiteralShape<'_> {
    match name {
        "true" => LiteralShape::Boolean(true),
        "false" => LiteralShape::Boolean(false),
        "nil" => LiteralShape::Nil,
        _ => LiteralShape::Atom(name),
    }
}

fn alias_name(segments: &[Ast]) -> Option<String> {
    let segments: Option<Vec<&str>> = segments.iter().map(Ast::as_atom).collect();
    segments.filter(|s| !s.is_empty()).map(|s| s.join("."))
}

fn module_of(ast: &Ast, current_module: Option<&str>) -> Option<String> {
    match ast.as_variable() {
        Some("__MODULE__") => current_module.map(str::to_string),
        Some(_) => None,
        None => ast.module_name(),
    }
}

/// Split a trailing `head | tail` cons cell off a list
fn split_tail(items: &[Ast]) -> (Vec<&Ast>, Option<&Ast>) {
    let Some((last, init)) = items.split_last() else {
        return (Vec::new(), None);
    };
    match last.as_form().filter(|f| f.is_named("|")).map(Form::args) {
        Some([head, tail]) => {
            let mut elements: Vec<&Ast> = init.iter().collect();
            elements.push(head);
            (elements, Some(tail))
        }
        _ => (items.iter().collect(), None),
    }
}

/// Highest Unicode code point
const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Text of a list made only of code points; surrogates render as U+FFFD
fn charlist_text(items: &[Ast]) -> Option<String> {
    items
        .iter()
        .map(|item| {
            item.as_integer()
                .and_then(|n| u32::try_from(n).ok())
                .filter(|&n| n <= MAX_CODE_POINT)
                .map(|n| char::from_u32(n).unwrap_or(char::REPLACEMENT_CHARACTER))
        })
        .collect()
}

fn keyword_pairs(items: &[Ast]) -> Option<Vec<(&str, &Ast)>> {
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| match item {
            Ast::Tuple(pair) => match pair.as_slice() {
                [Ast::Atom(key), value] => Some((key.as_str(), value)),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

/// `%{k => v}` entries; `None` for update syntax or anything that is not a pair
fn map_entries(args: &[Ast]) -> Option<Vec<(&Ast, &Ast)>> {
    args.iter()
        .map(|arg| match arg {
            Ast::Tuple(pair) => match pair.as_slice() {
                [key, value] => Some((key, value)),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

type StructParts<'a> = (Option<String>, Vec<(&'a Ast, &'a Ast)>);

fn struct_parts<'a>(args: &'a [Ast], current_module: Option<&str>) -> Option<StructParts<'a>> {
    let [module, map] = args else {
        return None;
    };
    let map = map.as_form().filter(|f| f.is_named("%{}"))?;
    let entries = map_entries(map.args())?;
    Some((module_of(module, current_module), entries))
}

/// Segment bytes when every segment is a literal integer
fn binary_bytes(segments: &[Ast]) -> Option<Vec<u8>> {
    segments
        .iter()
        .map(|segment| segment.as_integer().map(|n| n.rem_euclid(256) as u8))
        .collect()
}
