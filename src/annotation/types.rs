//! Type transcoding from YARD type lists to RBS type expressions
//!
//! YARD writes unions as comma lists (`String, nil`) and generics with angle
//! brackets (`Array<String>`). RBS uses `|` and square brackets, and requires
//! type arguments on the core containers.

use crate::base::WILDCARD_TYPE;
use crate::error::ConvertError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Class names with a dedicated RBS spelling
static RENAMED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:Boolean|NilClass)\b").expect("valid rename pattern"));

/// Convert one YARD type expression to RBS.
///
/// Parenthesized types (`Proc(Integer)`, `(String, Integer)`) have no
/// mechanical translation and fail the conversion.
pub fn transcode(ty: &str) -> Result<String, ConvertError> {
    if ty.contains(['(', ')']) {
        return Err(ConvertError::unsupported_type(ty));
    }

    let ty = ty.replace(", ", " | ").replace('<', "[").replace('>', "]");
    let ty = RENAMED.replace_all(&ty, |caps: &Captures<'_>| match &caps[0] {
        "Boolean" => "bool",
        _ => "nil",
    });
    // Only a whole-type container gets wildcard arguments
    Ok(match ty.as_ref() {
        "Array" => format!("Array[{WILDCARD_TYPE}]"),
        "Hash" => format!("Hash[{WILDCARD_TYPE}, {WILDCARD_TYPE}]"),
        _ => ty.into_owned(),
    })
}
