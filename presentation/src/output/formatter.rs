//! Output formatter trait

use council_domain::{DecisionRecord, RelocationRequest};

/// Trait for formatting decision records
pub trait OutputFormatter {
    /// Format the complete decision record
    fn format(&self, request: &RelocationRequest, record: &DecisionRecord) -> String;

    /// Format as JSON
    fn format_json(&self, record: &DecisionRecord) -> String;

    /// Format only the verdict and headline factors
    fn format_summary(&self, request: &RelocationRequest, record: &DecisionRecord) -> String;
}
