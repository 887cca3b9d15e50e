//! Counter-based expression identifiers

use super::domain::Context;
use crate::shared::models::Iri;

/// Suffix overrides for `expression_iri`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IriOptions {
    /// Used verbatim; the counter is left untouched
    pub suffix: Option<String>,
    /// Formatted as `expr_{n}`; the counter is left untouched
    pub counter: Option<u64>,
}

impl IriOptions {
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self {
            suffix: Some(suffix.into()),
            counter: None,
        }
    }

    pub fn counter(n: u64) -> Self {
        Self {
            suffix: None,
            counter: Some(n),
        }
    }
}

/// `{namespace}expr/{suffix}`
///
/// Suffix resolution: explicit suffix, then explicit counter, then the next
/// counter value for `namespace` (the only case that advances the context).
pub fn expression_iri(namespace: &str, ctx: Context, opts: &IriOptions) -> (Iri, Context) {
    let (suffix, ctx) = match (&opts.suffix, opts.counter) {
        (Some(suffix), _) => (suffix.clone(), ctx),
        (None, Some(n)) => (format!("expr_{}", n), ctx),
        (None, None) => {
            let (n, ctx) = ctx.next_counter(namespace);
            (format!("expr_{}", n), ctx)
        }
    };
    (Iri::new(format!("{}expr/{}", namespace, suffix)), ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "https://ex.org/code#";

    #[test]
    fn test_counter_sequence() {
        let mut ctx = Context::default().with_expression_counter();
        let mut minted = Vec::new();
        for _ in 0..3 {
            let (iri, next) = expression_iri(NS, ctx, &IriOptions::default());
            minted.push(iri.into_string());
            ctx = next;
        }
        assert_eq!(
            minted,
            vec![
                "https://ex.org/code#expr/expr_0",
                "https://ex.org/code#expr/expr_1",
                "https://ex.org/code#expr/expr_2",
            ]
        );
    }

    #[test]
    fn test_suffix_wins_and_does_not_advance() {
        let ctx = Context::default().with_expression_counter();
        let opts = IriOptions {
            suffix: Some("guard".into()),
            counter: Some(7),
        };
        let (iri, ctx) = expression_iri(NS, ctx, &opts);
        assert_eq!(iri.as_str(), "https://ex.org/code#expr/guard");
        assert_eq!(ctx.peek_counter(NS), 0);
    }

    #[test]
    fn test_counter_override_does_not_advance() {
        let ctx = Context::default().with_expression_counter();
        let (iri, ctx) = expression_iri(NS, ctx, &IriOptions::counter(42));
        assert_eq!(iri.as_str(), "https://ex.org/code#expr/expr_42");
        assert_eq!(ctx.peek_counter(NS), 0);
    }
}
