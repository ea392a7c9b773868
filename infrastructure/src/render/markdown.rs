//! Markdown report renderer
//!
//! Renders a decision record into the sectioned markdown report and writes
//! it under the configured reports directory. File names follow
//! `{origin}_to_{destination}_{timestamp}_analysis.md` so the front door
//! can locate a report from a job's timestamp.

use async_trait::async_trait;
use council_application::{DeliveredReport, ReportSink, SinkError};
use council_domain::{DecisionRecord, RelocationRequest};
use std::path::PathBuf;

/// Writes markdown reports to disk
pub struct MarkdownReportRenderer {
    reports_dir: PathBuf,
}

impl MarkdownReportRenderer {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    /// Report file name for a request at a given timestamp
    pub fn file_name(request: &RelocationRequest, timestamp: &str) -> String {
        format!(
            "{}_to_{}_{}_analysis.md",
            sanitize(request.origin.as_str()),
            sanitize(request.destination.as_str()),
            timestamp,
        )
    }

    /// Render the full markdown document
    pub fn render(request: &RelocationRequest, record: &DecisionRecord) -> String {
        let mut doc = String::new();

        doc.push_str(&format!(
            "# Should You Move from {} to {}?\n\n",
            request.origin, request.destination
        ));

        doc.push_str("## Executive Summary\n\n");
        doc.push_str(&format!(
            "The council {} (confidence: {}).\n\n",
            record.recommendation.describe(),
            record.confidence,
        ));
        if let Some(financial) = &record.financial_impact {
            doc.push_str(&format!("- Financial impact: {}\n", financial));
        }
        if let Some(lifestyle) = &record.lifestyle_impact {
            doc.push_str(&format!("- Lifestyle impact: {}\n", lifestyle));
        }
        if record.degraded {
            doc.push_str(
                "- Note: not every specialist reported; confidence is reduced accordingly.\n",
            );
        }
        doc.push('\n');

        if let Some(priority) = request.priority_factor() {
            doc.push_str("## Your Stated Priority\n\n");
            doc.push_str(&format!("{}\n\n", priority));
        }

        if let Some(debate) = &record.debate {
            doc.push_str("## Debate Summary\n\n");
            doc.push_str(&format!(
                "Rounds run: {} ({})\n\n",
                debate.rounds_run,
                if debate.converged {
                    "settled early"
                } else {
                    "round budget exhausted"
                }
            ));
            if !debate.agreement_points.is_empty() {
                doc.push_str("Points of agreement:\n");
                for point in &debate.agreement_points {
                    doc.push_str(&format!("- {}\n", point));
                }
                doc.push('\n');
            }
            if !debate.disagreement_points.is_empty() {
                doc.push_str("Points of disagreement:\n");
                for point in &debate.disagreement_points {
                    doc.push_str(&format!("- {}\n", point));
                }
                doc.push('\n');
            }
            doc.push_str(&format!("{}\n\n", debate.consensus_narrative));
        }

        for section in &record.specialist_reports {
            doc.push_str(&format!("## {} Report\n\n", section.specialist));
            doc.push_str(&format!("{}\n\n", section.body));
        }

        if !record.failures.is_empty() {
            doc.push_str("## Specialists That Could Not Report\n\n");
            for failure in &record.failures {
                doc.push_str(&format!("- {}\n", failure));
            }
            doc.push('\n');
        }

        if !record.supporting_factors.is_empty() {
            doc.push_str("## Key Supporting Factors\n\n");
            for factor in &record.supporting_factors {
                doc.push_str(&format!("- {}\n", factor));
            }
            doc.push('\n');
        }

        if !record.concerns.is_empty() {
            doc.push_str("## Key Concerns\n\n");
            for concern in &record.concerns {
                doc.push_str(&format!("- {}\n", concern));
            }
            doc.push('\n');
        }

        if !record.next_steps.is_empty() {
            doc.push_str("## Next Steps\n\n");
            for (index, step) in record.next_steps.iter().enumerate() {
                doc.push_str(&format!("{}. {}\n", index + 1, step));
            }
            doc.push('\n');
        }

        doc.push_str("## Report Metadata\n\n");
        doc.push_str(&format!(
            "- Recommendation: {}\n- Confidence: {}\n- Generated by: relo-council\n",
            record.recommendation, record.confidence,
        ));

        doc
    }
}

#[async_trait]
impl ReportSink for MarkdownReportRenderer {
    async fn deliver(
        &self,
        request: &RelocationRequest,
        record: &DecisionRecord,
    ) -> Result<DeliveredReport, SinkError> {
        tokio::fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| SinkError::Write(format!("could not create reports dir: {}", e)))?;

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        let path = self
            .reports_dir
            .join(Self::file_name(request, &timestamp));

        tokio::fs::write(&path, Self::render(request, record))
            .await
            .map_err(|e| SinkError::Write(format!("could not write {}: {}", path.display(), e)))?;

        Ok(DeliveredReport {
            location: path.display().to_string(),
        })
    }
}

/// Lowercase, alphanumeric-and-underscore city fragment for file names
fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            prev_underscore = false;
        } else if !prev_underscore && !out.is_empty() {
            out.push('_');
            prev_underscore = true;
        }
    }

    out.trim_end_matches('_').to_string()
}
