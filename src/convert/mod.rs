//! Converter
//!
//! Runs the whole pipeline over one source text:
//!
//! ```text
//! source ─ parse ─ comment_runs ─ rewrite_run (per run) ─ Replacer ─ output
//! ```
//!
//! The output differs from the input only inside comment runs that were
//! rewritten. A failure in any run aborts the file without partial output.

mod batch;
mod options;

pub use batch::convert_batch;
pub use options::ConvertOptions;

pub use crate::error::ConvertError;

use crate::annotation::rewrite_run;
use crate::base::ANNOTATION_MARKER;
use crate::parser::parse;
use crate::rewrite::Replacer;
use crate::scan::comment_runs;
use std::borrow::Cow;

/// Convert YARD tags in `source` with default options
pub fn convert(source: &str) -> Result<String, ConvertError> {
    Converter::default().convert(source)
}

/// Rewrites the YARD comments of whole Ruby files
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn convert(&self, source: &str) -> Result<String, ConvertError> {
        if !source.contains(ANNOTATION_MARKER) {
            tracing::debug!("no annotation marker, skipping");
            return Ok(source.to_string());
        }

        let parse = parse(source);
        for error in &parse.errors {
            tracing::warn!("{} at {:?}", error.message, error.range);
        }
        tracing::debug!(
            "parsed {} definitions, {} comments",
            parse.definitions.len(),
            parse.comments.len()
        );

        let mut replacer = Replacer::new(source);
        for (definition, run) in comment_runs(&parse) {
            let lines = rewrite_run(&run.lines, self.options.foreign_tags)
                .map_err(|e| e.in_definition(definition.name.clone(), definition.line + 1))?;
            tracing::trace!(
                "[CONVERT] `{}` (line {}): {} lines -> {} lines",
                definition.name,
                definition.line + 1,
                run.lines.len(),
                lines.len()
            );
            let original = &source[run.range];
            let replacement = join_lines(&lines, run.indent, line_ending(original));
            if replacement != original {
                replacer.add(run.range, replacement);
            }
        }

        tracing::debug!("applying {} edits", replacer.len());
        Ok(replacer.execute())
    }
}

/// Join rendered lines one per line, each indented like the top of the run
fn join_lines(lines: &[Cow<'_, str>], indent: usize, line_ending: &str) -> String {
    let separator = format!("{line_ending}{}", " ".repeat(indent));
    lines.join(separator.as_str())
}

fn line_ending(run_text: &str) -> &'static str {
    if run_text.contains("\r\n") { "\r\n" } else { "\n" }
}
