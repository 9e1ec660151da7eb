pub mod analyzer;
pub mod cli;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod http_client;
pub mod keywords;
pub mod link_checker;
pub mod links;
pub mod models;
pub mod reporter;
pub mod robots;
pub mod scorer;

use std::time::Duration;

use analyzer::{Analyzer, AnalyzerConfig};
use anyhow::Result;
use cli::Cli;
use colored::*;
use fetcher::FetchConfig;
use reporter::Reporter;

pub async fn run(args: Cli) -> Result<()> {
    // JSON output must stay machine-readable, so the banner and progress
    // bar only show in text mode
    let text_output = args.output != "json";

    if text_output {
        println!(
            "{}",
            "Seolens - Single-Page SEO Analyzer".bright_cyan().bold()
        );
        println!("{}", "=".repeat(50).bright_blue());
        println!();
        println!("{} {}", "Analyzing:".bright_white().bold(), args.url);
        println!(
            "{} {}",
            "Link check limit:".bright_white().bold(),
            args.link_limit
        );
        println!("{} {}s", "Timeout:".bright_white().bold(), args.timeout);
        println!();
    }

    let fetch = FetchConfig {
        page_timeout: Duration::from_secs(args.timeout),
        ..FetchConfig::default()
    };
    let mut analyzer = Analyzer::new(AnalyzerConfig {
        fetch,
        link_check_limit: args.link_limit,
        naive_tld: args.naive_tld,
    })?;

    if text_output {
        analyzer.enable_progress_bar();
    }

    if args.verbose && text_output {
        println!("{}", "Fetching and analyzing page...".bright_yellow());
    }

    let report = analyzer.analyze(&args.url).await?;

    if args.verbose && text_output {
        println!("{}", "Analysis complete".bright_green());
        println!();
    }

    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        _ => {
            Reporter::print_text_report(&report);
        }
    }

    // Save to file if requested
    if let Some(filename) = args.save {
        Reporter::save_json_report(&report, &filename)?;
    }

    Ok(())
}
