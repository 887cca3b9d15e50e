//! Type expression classification

use super::domain::TypeShape;
use crate::shared::models::{Ast, Form, Head};

pub fn classify_type(ast: &Ast) -> TypeShape<'_> {
    match ast {
        Ast::Atom(name) => TypeShape::Literal(name.clone()),
        Ast::Integer(n) => TypeShape::Literal(n.to_string()),
        Ast::Tuple(items) => TypeShape::Tuple(items),
        Ast::List(items) => classify_list(items),
        Ast::Float(_) | Ast::String(_) => TypeShape::Generic { form_name: None },
        Ast::Form(form) => classify_form(form),
    }
}

fn classify_list(items: &[Ast]) -> TypeShape<'_> {
    match items {
        [single] => match single.as_form().filter(|f| f.is_named("->")).map(Form::args) {
            Some([Ast::List(params), ret]) => TypeShape::Function { params, ret },
            Some(_) => TypeShape::Generic {
                form_name: Some("->"),
            },
            None => TypeShape::Parameterized {
                name: "list",
                args: vec![single],
            },
        },
        _ => TypeShape::Generic { form_name: None },
    }
}

fn classify_form(form: &Form) -> TypeShape<'_> {
    let name = match &form.head {
        Head::Atom(name) => name.as_str(),
        Head::Expr(head) => return classify_remote(head, form.args()),
    };
    let Some(args) = form.args.as_deref() else {
        return TypeShape::Variable(name);
    };

    match (name, args) {
        ("|", [_, _]) => {
            let mut members = Vec::new();
            flatten_union(args, &mut members);
            TypeShape::Union(members)
        }
        ("::", [_, annotated]) => classify_type(annotated),
        ("{}", _) => TypeShape::Tuple(args),
        ("%{}", _) => map_fields(args)
            .map(TypeShape::Map)
            .unwrap_or(TypeShape::Generic {
                form_name: Some("%{}"),
            }),
        ("-", [Ast::Integer(n)]) => TypeShape::Literal(format!("-{}", n)),
        ("%" | ".." | "<<>>" | "__aliases__", _) => TypeShape::Generic {
            form_name: Some(name),
        },
        (_, []) => TypeShape::Basic(name),
        (_, _) => TypeShape::Parameterized {
            name,
            args: args.iter().collect(),
        },
    }
}

fn classify_remote<'a>(head: &'a Ast, args: &'a [Ast]) -> TypeShape<'a> {
    let remote = head
        .as_form()
        .filter(|f| f.is_named("."))
        .and_then(|dot| match dot.args() {
            [module, Ast::Atom(name)] => Some((module.module_name()?, name.as_str())),
            _ => None,
        });
    match remote {
        Some((module, name)) => TypeShape::Remote { module, name, args },
        None => TypeShape::Generic { form_name: None },
    }
}

/// Collect `a | (b | c)` members left to right
fn flatten_union<'a>(args: &'a [Ast], members: &mut Vec<&'a Ast>) {
    let mut pending: Vec<&Ast> = args.iter().rev().collect();
    while let Some(arg) = pending.pop() {
        match arg.as_form().filter(|f| f.is_named("|")).map(Form::args) {
            Some(inner @ [_, _]) => pending.extend(inner.iter().rev()),
            _ => members.push(arg),
        }
    }
}

fn map_fields(args: &[Ast]) -> Option<Vec<(&Ast, &Ast)>> {
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
