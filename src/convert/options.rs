//! Conversion options

use crate::annotation::ForeignTagPolicy;

/// Options for [`crate::Converter`]
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Foreign tag detection for mixed comment runs
    pub foreign_tags: ForeignTagPolicy,
}

impl ConvertOptions {
    pub fn with_foreign_tags(mut self, policy: ForeignTagPolicy) -> Self {
        self.foreign_tags = policy;
        self
    }
}
