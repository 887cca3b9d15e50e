//! Build options and outcomes

use crate::features::context::{Context, IriOptions};
use crate::shared::models::{Iri, TripleSet};

/// Options for one `ExpressionBuilder::build` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExprOpts {
    /// Identifier namespace (defaults to the context's base IRI)
    pub namespace: Option<String>,
    /// Custom identifier suffix; leaves counters untouched
    pub suffix: Option<String>,
    /// Explicit counter value; leaves counters untouched
    pub counter: Option<u64>,
    /// Reuse the identifier of a structurally identical, already-built tree
    pub share_structure: bool,
    /// Overrides the context's current module for `__MODULE__`
    pub current_module: Option<String>,
}

impl ExprOpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..Self::default()
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_counter(mut self, counter: u64) -> Self {
        self.counter = Some(counter);
        self
    }

    /// Opt into structural sharing; needs a context cache (`Context::with_cache`)
    pub fn sharing_structure(mut self) -> Self {
        self.share_structure = true;
        self
    }

    pub fn with_current_module(mut self, module: impl Into<String>) -> Self {
        self.current_module = Some(module.into());
        self
    }

    pub fn iri_options(&self) -> IriOptions {
        IriOptions {
            suffix: self.suffix.clone(),
            counter: self.counter,
        }
    }
}

/// Outcome of a build call
///
/// `Skip` is an expected result (extraction disabled, absent value, dependency
/// file), never an error. The caller's own context stays valid after a skip.
#[derive(Debug, Clone)]
pub enum BuildResult {
    Skip,
    Ok {
        iri: Iri,
        triples: TripleSet,
        context: Context,
    },
}

impl BuildResult {
    pub fn is_skip(&self) -> bool {
        matches!(self, BuildResult::Skip)
    }

    pub fn iri(&self) -> Option<&Iri> {
        match self {
            BuildResult::Skip => None,
            BuildResult::Ok { iri, .. } => Some(iri),
        }
    }

    pub fn triples(&self) -> Option<&TripleSet> {
        match self {
            BuildResult::Skip => None,
            BuildResult::Ok { triples, .. } => Some(triples),
        }
    }

    /// Link the root from `owner` and splice the triples into `triples`
    ///
    /// Returns the context to continue with: the updated one on success,
    /// `current` on a skip.
    pub fn attach_to(
        self,
        owner: &Iri,
        predicate: &str,
        triples: &mut TripleSet,
        current: Context,
    ) -> Context {
        match self {
            BuildResult::Skip => current,
            BuildResult::Ok {
                iri,
                triples: built,
                context,
            } => {
                triples.add_iri(owner, predicate, &iri);
                triples.extend(built);
                context
            }
        }
    }

    pub fn into_parts(self) -> Option<(Iri, TripleSet, Context)> {
        match self {
            BuildResult::Skip => None,
            BuildResult::Ok {
                iri,
                triples,
                context,
            } => Some((iri, triples, context)),
        }
    }
}
