//! Identifier generation utilities
//!
//! Identifiers are composed from the base namespace and path segments only,
//! so the same input always yields the same identifier and no registry is
//! needed. Counter-based expression identifiers live with the build context
//! (`features::context`), since they need the per-namespace counters.

use std::fmt;

use crate::shared::models::Iri;

/// Child kind under a module (`{module}/{kind}/{name}/{arity}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Function,
    Macro,
    Type,
    Callback,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Function => "function",
            MemberKind::Macro => "macro",
            MemberKind::Type => "type",
            MemberKind::Callback => "callback",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append `/{role}` to `parent`
///
/// Operand addresses derive from their parent and role, so identical
/// sub-trees at different positions never collide.
pub fn fresh_iri(parent: &Iri, role: &str) -> Iri {
    Iri::new(format!("{}/{}", parent.as_str(), role))
}

/// Structural identifier builder
pub struct IriGenerator;

impl IriGenerator {
    /// `{base}A.B.C`
    pub fn module(base: &str, module_name: &str) -> Iri {
        let escaped: Vec<String> = module_name.split('.').map(escape_segment).collect();
        Iri::new(format!("{}{}", base, escaped.join(".")))
    }

    /// `{module}/{kind}/{name}/{arity}`
    pub fn member(module_iri: &Iri, kind: MemberKind, name: &str, arity: u32) -> Iri {
        Iri::new(format!(
            "{}/{}/{}/{}",
            module_iri.as_str(),
            kind,
            escape_segment(name),
            arity
        ))
    }

    /// `{function}/clause/{index}`
    pub fn clause(function_iri: &Iri, index: usize) -> Iri {
        Iri::new(format!("{}/clause/{}", function_iri.as_str(), index))
    }

    /// `{clause}/param/{index}`
    pub fn parameter(clause_iri: &Iri, index: usize) -> Iri {
        Iri::new(format!("{}/param/{}", clause_iri.as_str(), index))
    }

    /// `{owner}/location`
    pub fn location(owner: &Iri) -> Iri {
        fresh_iri(owner, "location")
    }

    /// Namespace under which a node's nested expressions are minted (`{iri}/`)
    pub fn namespace_of(iri: &Iri) -> String {
        format!("{}/", iri.as_str())
    }
}

/// Percent-encode everything outside `[A-Za-z0-9._~-]`
pub fn escape_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
