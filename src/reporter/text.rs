use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::models::ScanOutcome;

const PROTECTED_LIST_LIMIT: usize = 20;

/// Rendered scan report. A pure function of the target template and the
/// outcome, timestamp excepted.
pub struct Report {
    text: String,
}

impl Report {
    pub fn build(target: &str, outcome: &ScanOutcome) -> Self {
        Self::build_at(target, outcome, Utc::now())
    }

    pub fn build_at(target: &str, outcome: &ScanOutcome, generated: DateTime<Utc>) -> Self {
        let rule = "=".repeat(60);
        let mut text = String::new();

        writeln!(text, "{}", rule).unwrap();
        writeln!(text, "IDOR-Miner Scan Report").unwrap();
        writeln!(text, "{}", rule).unwrap();
        writeln!(
            text,
            "Scan Time: {}",
            generated.format("%Y-%m-%d %H:%M:%S UTC")
        )
        .unwrap();
        writeln!(text, "Target URL: {}", target).unwrap();
        writeln!(text).unwrap();

        writeln!(text, "SUMMARY").unwrap();
        writeln!(text, "-------").unwrap();
        writeln!(text, "Total Vulnerable IDs: {}", outcome.vulnerable_count()).unwrap();
        writeln!(text, "Total Protected IDs: {}", outcome.protected_count()).unwrap();
        writeln!(text).unwrap();

        if outcome.has_vulnerable() {
            writeln!(text, "VULNERABLE IDs (IDOR DETECTED)").unwrap();
            writeln!(text, "{}", "-".repeat(60)).unwrap();
            for finding in outcome.vulnerable() {
                writeln!(text, "  ID: {}", finding.id).unwrap();
                writeln!(text, "  Status: {}", finding.status.unwrap_or_default()).unwrap();
                writeln!(
                    text,
                    "  Response Size: {} bytes",
                    finding.body_size.unwrap_or_default()
                )
                .unwrap();
                writeln!(text, "  PoC: {}", finding.poc()).unwrap();
                writeln!(text).unwrap();
            }
        } else {
            writeln!(
                text,
                "✓ No IDOR vulnerabilities found! All IDs properly protected."
            )
            .unwrap();
            writeln!(text).unwrap();
        }

        let protected = outcome.protected_ids();
        if !protected.is_empty() {
            let listed: Vec<String> = protected
                .iter()
                .take(PROTECTED_LIST_LIMIT)
                .map(i64::to_string)
                .collect();
            write!(text, "Protected IDs: {}", listed.join(", ")).unwrap();
            if protected.len() > PROTECTED_LIST_LIMIT {
                write!(text, "... ({} more)", protected.len() - PROTECTED_LIST_LIMIT).unwrap();
            }
            writeln!(text).unwrap();
            writeln!(text).unwrap();
        }

        writeln!(text, "{}", rule).unwrap();

        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Persist the report verbatim, overwriting any existing file.
    pub fn save(&self, path: &str) -> Result<()> {
        fs::write(path, &self.text).with_context(|| format!("Failed to write to {}", path))
    }
}
