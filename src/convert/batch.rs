//! Parallel conversion of independent sources

use super::{ConvertError, Converter};
use rayon::prelude::*;

/// Convert many sources in parallel with default options.
///
/// Results come back in input order; one failing source does not affect the
/// others.
pub fn convert_batch<S>(sources: &[S]) -> Vec<Result<String, ConvertError>>
where
    S: AsRef<str> + Sync,
{
    Converter::default().convert_batch(sources)
}

impl Converter {
    /// Convert many sources in parallel with this converter's options
    pub fn convert_batch<S>(&self, sources: &[S]) -> Vec<Result<String, ConvertError>>
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<_> = sources
            .par_iter()
            .map(|source| self.convert(source.as_ref()))
            .collect();
        tracing::debug!(
            "converted {} sources, {} failed",
            results.len(),
            results.iter().filter(|r| r.is_err()).count()
        );
        results
    }
}
