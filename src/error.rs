//! Error types for conversion.

use smol_str::SmolStr;
use thiserror::Error;

/// Errors that abort the conversion of a whole file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A captured type uses call-style or parenthesized syntax.
    #[error("unsupported type expression `{ty}`: parenthesized types cannot be converted")]
    UnsupportedType { ty: String },

    /// An error raised while rewriting the comments of one definition.
    #[error("comments above `{name}` (line {line}): {source}")]
    Definition {
        name: SmolStr,
        /// 1-based line of the `def` keyword
        line: usize,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    /// Create an unsupported type error.
    pub fn unsupported_type(ty: impl Into<String>) -> Self {
        Self::UnsupportedType { ty: ty.into() }
    }

    /// Attach the definition whose comment run failed.
    pub fn in_definition(self, name: impl Into<SmolStr>, line: usize) -> Self {
        Self::Definition {
            name: name.into(),
            line,
            source: Box::new(self),
        }
    }

    /// The innermost error, past any definition context.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Definition { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
