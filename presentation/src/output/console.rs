//! Console output formatter for decision records

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use council_domain::{DecisionRecord, Recommendation, RelocationRequest};

/// Formats decision records for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete decision record
    pub fn format(request: &RelocationRequest, record: &DecisionRecord) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Relocation Council Verdict"));
        output.push('\n');

        output.push_str(&format!(
            "{} {} -> {}\n\n",
            "Move:".cyan().bold(),
            request.origin,
            request.destination
        ));

        output.push_str(&format!(
            "{} {} ({} confidence)\n",
            "Verdict:".cyan().bold(),
            Self::verdict_text(record.recommendation),
            record.confidence,
        ));
        if record.degraded {
            output.push_str(&format!(
                "{}\n",
                "Some specialists did not report; confidence is reduced.".yellow()
            ));
        }
        output.push('\n');

        if let Some(financial) = &record.financial_impact {
            output.push_str(&format!("{} {}\n", "Financial:".cyan().bold(), financial));
        }
        if let Some(lifestyle) = &record.lifestyle_impact {
            output.push_str(&format!("{} {}\n", "Lifestyle:".cyan().bold(), lifestyle));
        }

        output.push_str(&Self::section_header("Specialist Reports"));
        for section in &record.specialist_reports {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("-- {} --", section.specialist).yellow().bold(),
                section.body
            ));
        }
        for failure in &record.failures {
            output.push_str(&format!(
                "\n{}\n",
                format!("-- {} -- {}", failure.specialist, failure.reason)
                    .red()
                    .bold()
            ));
        }

        if let Some(debate) = &record.debate {
            output.push_str(&Self::section_header("Debate"));
            output.push_str(&format!(
                "\nRounds: {} ({})\n",
                debate.rounds_run,
                if debate.converged {
                    "settled early".green().to_string()
                } else {
                    "budget exhausted".yellow().to_string()
                }
            ));
            if !debate.agreement_points.is_empty() {
                output.push_str(&format!("\n{}\n", "Agreement:".green().bold()));
                for point in &debate.agreement_points {
                    output.push_str(&format!("  * {}\n", point));
                }
            }
            if !debate.disagreement_points.is_empty() {
                output.push_str(&format!("\n{}\n", "Disagreement:".yellow().bold()));
                for point in &debate.disagreement_points {
                    output.push_str(&format!("  * {}\n", point));
                }
            }
            output.push_str(&format!("\n{}\n", debate.consensus_narrative));
        }

        if !record.supporting_factors.is_empty() {
            output.push_str(&format!("\n{}\n", "Supporting factors:".green().bold()));
            for factor in &record.supporting_factors {
                output.push_str(&format!("  * {}\n", factor));
            }
        }

        if !record.concerns.is_empty() {
            output.push_str(&format!("\n{}\n", "Concerns:".yellow().bold()));
            for concern in &record.concerns {
                output.push_str(&format!("  * {}\n", concern));
            }
        }

        if !record.next_steps.is_empty() {
            output.push_str(&format!("\n{}\n", "Next steps:".cyan().bold()));
            for (index, step) in record.next_steps.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", index + 1, step));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(record: &DecisionRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format only the verdict and headline factors
    pub fn format_summary(request: &RelocationRequest, record: &DecisionRecord) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Relocation Council Verdict ===".cyan().bold()
        ));
        output.push_str(&format!(
            "{} {} -> {}\n",
            "Move:".bold(),
            request.origin,
            request.destination
        ));
        output.push_str(&format!(
            "{} {} ({} confidence)\n",
            "Verdict:".bold(),
            Self::verdict_text(record.recommendation),
            record.confidence,
        ));

        if let Some(factor) = record.supporting_factors.first() {
            output.push_str(&format!("{} {}\n", "For:".green(), factor));
        }
        if let Some(concern) = record.concerns.first() {
            output.push_str(&format!("{} {}\n", "Against:".yellow(), concern));
        }

        output
    }

    fn verdict_text(recommendation: Recommendation) -> String {
        match recommendation {
            Recommendation::Recommend => "Recommend the move".green().bold().to_string(),
            Recommendation::RecommendWithCaution => {
                "Recommend with caution".yellow().bold().to_string()
            }
            Recommendation::DoNotRecommend => "Do not recommend".red().bold().to_string(),
            Recommendation::InsufficientData => "Insufficient data".dimmed().bold().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, request: &RelocationRequest, record: &DecisionRecord) -> String {
        Self::format(request, record)
    }

    fn format_json(&self, record: &DecisionRecord) -> String {
        Self::format_json(record)
    }

    fn format_summary(&self, request: &RelocationRequest, record: &DecisionRecord) -> String {
        Self::format_summary(request, record)
    }
}
