//! Annotation parser
//!
//! Classifies the lines of one comment run as YARD `@return` / `@param`
//! tags or opaque text, decides whether the run can be rewritten safely,
//! and renders the rbs-inline replacement lines.
//!
//! ```text
//! "# @param [String, nil] name the name"
//!     ↓ classify
//! Annotation::Param { name: "name", ty: "String, nil", description: Some("the name") }
//!     ↓ decide + render
//! "# @rbs name: String | nil -- the name"
//! ```

mod policy;
mod types;


pub use policy::{Emission, ForeignTagPolicy, decide};
pub use types::transcode;

use crate::error::ConvertError;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static RETURN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# @return \[(?P<ty>.+?)\](?: (?P<desc>.*))?$").expect("valid @return pattern")
});

/// `# @param [Type] name`
static PARAM_TYPE_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# @param \[(?P<ty>.+?)\] (?P<name>\S+)(?: (?P<desc>.*))?$")
        .expect("valid @param pattern")
});

/// `# @param name [Type]`
static PARAM_NAME_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# @param (?P<name>\S+) \[(?P<ty>.+?)\](?: (?P<desc>.*))?$")
        .expect("valid @param pattern")
});

/// One classified comment line, borrowing from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation<'a> {
    Return {
        ty: &'a str,
        description: Option<&'a str>,
    },
    Param {
        name: &'a str,
        ty: &'a str,
        description: Option<&'a str>,
    },
    /// Anything else, kept as written
    Opaque(&'a str),
}

impl<'a> Annotation<'a> {
    /// Classify a whole comment line, `#` included
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = RETURN_TAG.captures(line) {
            return Self::Return {
                ty: group(&caps, "ty"),
                description: description(&caps),
            };
        }
        let param = PARAM_TYPE_FIRST
            .captures(line)
            .or_else(|| PARAM_NAME_FIRST.captures(line));
        if let Some(caps) = param {
            return Self::Param {
                name: group(&caps, "name"),
                ty: group(&caps, "ty"),
                description: description(&caps),
            };
        }
        Self::Opaque(line)
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Self::Return { .. })
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param { .. })
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }

    /// Render as an rbs-inline comment line. Opaque lines come back as is.
    pub fn render(&self) -> Result<Cow<'a, str>, ConvertError> {
        let (label, ty, description) = match *self {
            Self::Opaque(text) => return Ok(Cow::Borrowed(text)),
            Self::Return { ty, description } => ("return", ty, description),
            Self::Param {
                name,
                ty,
                description,
            } => (name, ty, description),
        };
        let ty = transcode(ty)?;
        Ok(Cow::Owned(match description {
            Some(description) => format!("# @rbs {label}: {ty} -- {description}"),
            None => format!("# @rbs {label}: {ty}"),
        }))
    }
}

fn group<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn description<'a>(caps: &Captures<'a>) -> Option<&'a str> {
    caps.name("desc")
        .map(|m| m.as_str())
        .filter(|desc| !desc.is_empty())
}

/// Compute the replacement lines for one comment run.
///
/// A verbatim run returns its own lines. Lines that render empty are dropped.
pub fn rewrite_run<'a>(
    lines: &[&'a str],
    policy: ForeignTagPolicy,
) -> Result<Vec<Cow<'a, str>>, ConvertError> {
    let annotations: Vec<_> = lines.iter().map(|&line| Annotation::classify(line)).collect();
    match decide(&annotations, policy) {
        Emission::Verbatim => Ok(lines.iter().map(|line| Cow::Borrowed(*line)).collect()),
        Emission::Rewrite(order) => {
            let mut rendered = Vec::with_capacity(order.len());
            for annotation in order {
                let line = annotation.render()?;
                if !line.is_empty() {
                    rendered.push(line);
                }
            }
            Ok(rendered)
        }
    }
}
