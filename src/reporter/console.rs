use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::models::{Classification, ProbeResult, ScanConfig, ScanOutcome};
use crate::scanner::ProgressSink;

pub struct ConsoleReporter;

#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Status")]
    status: u16,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_banner(&self) {
        let rule = "=".repeat(50);
        println!("{}", rule.blue());
        println!("{}", "  IDOR-Miner - Simple Access Control Tester".blue());
        println!("{}", rule.blue());
        println!();
    }

    pub fn print_scan_header(&self, config: &ScanConfig) {
        println!(
            "[*] Testing {} IDs from {} to {}...",
            config.total_ids(),
            config.range_start,
            config.range_end
        );
        println!("[*] Target: {}\n", config.url_template);
    }

    pub fn print_findings(&self, outcome: &ScanOutcome) {
        if !outcome.has_vulnerable() {
            return;
        }

        let rows: Vec<FindingRow> = outcome
            .vulnerable()
            .map(|r| FindingRow {
                id: r.id,
                status: r.status.unwrap_or_default(),
                size: format!("{} bytes", r.body_size.unwrap_or_default()),
                url: r.url.clone(),
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        println!("\n{}", "Findings".bold().underline());
        println!("{}", table);
    }

    pub fn print_saved(&self, path: &str) {
        println!("{}", format!("[✓] Report saved to: {}", path).green());
    }

    pub fn print_verdict(&self, outcome: &ScanOutcome) {
        if outcome.has_vulnerable() {
            println!(
                "\n{}",
                format!(
                    "[!] SECURITY ISSUE: Found {} IDOR vulnerabilities!",
                    outcome.vulnerable_count()
                )
                .red()
            );
        } else {
            println!("\n{}", "[✓] No IDOR vulnerabilities detected.".green());
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress sink that keeps a live bar at the bottom and prints one line per
/// probed identifier above it.
pub struct ConsoleSink {
    bar: ProgressBar,
}

impl ConsoleSink {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        Self { bar }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ConsoleSink {
    fn begin(&self, total: u64) {
        self.bar.set_length(total);
    }

    fn probe(&self, result: &ProbeResult) {
        let line = match result.classification {
            Classification::Vulnerable => format!(
                "[!] IDOR Found: ID {} returned {} (size: {} bytes)",
                result.id,
                result.status.unwrap_or_default(),
                result.body_size.unwrap_or_default()
            )
            .red()
            .to_string(),
            Classification::Protected => format!(
                "[✓] ID {}: {} (Protected)",
                result.id,
                result.status.unwrap_or_default()
            )
            .green()
            .to_string(),
            Classification::Other => format!(
                "[·] ID {}: {}",
                result.id,
                result.status.unwrap_or_default()
            ),
            Classification::Error => format!(
                "[!] Error testing ID {}: {}",
                result.id,
                result.error.as_deref().unwrap_or("unknown error")
            )
            .yellow()
            .to_string(),
        };

        self.bar.println(line);
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
