//! Emission policy for one comment run
//!
//! A run is rewritten only when every tag in it is understood. Mixing
//! converted `@rbs` lines with leftover YARD tags produces comments neither
//! tool reads correctly, so any unknown tag keeps the run untouched.

use super::Annotation;
use crate::base::TAG_SIGIL;
use regex::Regex;
use std::sync::LazyLock;

/// An `@` starting a word and followed by a tag name or YARD directive `!`
static TAG_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[\s#])@[!A-Za-z]").expect("valid tag prefix pattern"));

/// Which unrecognized comment lines count as carrying a foreign tag.
///
/// A run containing a foreign tag is emitted byte-for-byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForeignTagPolicy {
    /// Any `@` character anywhere in the line
    #[default]
    AnySigil,
    /// Only `@tag` or `@!directive` at the start of a word, so prose such as
    /// `user@example.com` does not block a rewrite
    TagPrefix,
}

impl ForeignTagPolicy {
    pub fn is_foreign(self, line: &str) -> bool {
        match self {
            Self::AnySigil => line.contains(TAG_SIGIL),
            Self::TagPrefix => TAG_PREFIX.is_match(line),
        }
    }
}

/// What to emit in place of a classified run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission<'r, 'a> {
    /// Keep the original lines untouched
    Verbatim,
    /// Render these annotations, in this order
    Rewrite(Vec<&'r Annotation<'a>>),
}

/// Decide how to emit a classified run. First matching rule wins:
///
/// 1. a lone `@return` line is rewritten;
/// 2. a run made only of `@param` lines is rewritten line for line;
/// 3. an unrecognized line carrying a foreign tag keeps the run verbatim;
/// 4. otherwise plain lines come first, then params, then the last return.
pub fn decide<'r, 'a>(
    annotations: &'r [Annotation<'a>],
    policy: ForeignTagPolicy,
) -> Emission<'r, 'a> {
    if let [only @ Annotation::Return { .. }] = annotations {
        return Emission::Rewrite(vec![only]);
    }
    if !annotations.is_empty() && annotations.iter().all(Annotation::is_param) {
        return Emission::Rewrite(annotations.iter().collect());
    }
    let foreign = annotations.iter().any(|annotation| match annotation {
        Annotation::Opaque(text) => policy.is_foreign(text),
        _ => false,
    });
    if foreign {
        return Emission::Verbatim;
    }

    let opaque = annotations.iter().filter(|a| a.is_opaque());
    let params = annotations.iter().filter(|a| a.is_param());
    // A later `@return` overrides an earlier one
    let last_return = annotations.iter().rev().find(|a| a.is_return());
    Emission::Rewrite(opaque.chain(params).chain(last_return).collect())
}
