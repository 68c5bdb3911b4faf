use std::process;

use chrono::Utc;
use clap::Parser;
use colored::Colorize;

use idorminer::cli::Cli;
use idorminer::error::ConfigError;
use idorminer::http::HttpClient;
use idorminer::models::{DEFAULT_TIMEOUT_SECS, HttpMethod, ScanConfig};
use idorminer::reporter::{ConsoleReporter, ConsoleSink, Report};
use idorminer::scanner::Sweeper;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let console = ConsoleReporter::new();
    console.print_banner();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", format!("[!] Error: {}", err).red());
            process::exit(1);
        }
    };

    match run(cli, config, &console).await {
        Ok(found_vulnerable) => process::exit(i32::from(found_vulnerable)),
        Err(err) => {
            eprintln!("{}", format!("[!] Error: {}", err).red());
            process::exit(1);
        }
    }
}

fn build_config(cli: &Cli) -> Result<ScanConfig, ConfigError> {
    let range = ScanConfig::parse_range(&cli.range)?;
    let headers = ScanConfig::parse_headers(&cli.headers)?;
    let method = HttpMethod::parse(&cli.method)?;
    ScanConfig::new(cli.url.clone(), range, headers, method)
}

async fn run(cli: Cli, config: ScanConfig, console: &ConsoleReporter) -> anyhow::Result<bool> {
    console.print_scan_header(&config);

    let client = HttpClient::new(DEFAULT_TIMEOUT_SECS)?;
    let sweeper = Sweeper::new(client, config).with_concurrency(cli.concurrency);
    let outcome = sweeper.run(&ConsoleSink::new()).await;

    console.print_findings(&outcome);

    let report = Report::build(&sweeper.config().url_template, &outcome);
    println!("\n{}", report.text());

    let path = cli.output.unwrap_or_else(default_report_path);
    report.save(&path)?;
    console.print_saved(&path);

    console.print_verdict(&outcome);
    Ok(outcome.has_vulnerable())
}

fn default_report_path() -> String {
    format!("idor_report_{}.txt", Utc::now().format("%Y%m%d_%H%M%S"))
}
