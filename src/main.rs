use clap::Parser;
use og_harvest::{RunSummary, UrlOutcome};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging, `info` unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let harvest = match args.into_harvest() {
        Ok(harvest) => harvest,
        Err(e) => {
            ::log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!(
        "Reading URLs from {}, writing images to {}",
        harvest.config().input.display(),
        harvest.config().output_dir.display()
    );

    let summary = match harvest.run().await {
        Ok(summary) => summary,
        Err(e) => {
            ::log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    print_summary(&summary);

    if let Some(path) = &args.report {
        let written = serde_json::to_string_pretty(&summary)
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(path, json).map_err(|e| e.to_string()));
        if let Err(e) = written {
            ::log::error!("Failed to write report to {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
        ::log::info!("Wrote report to {}", path.display());
    }

    ExitCode::SUCCESS
}

fn print_summary(summary: &RunSummary) {
    for report in &summary.reports {
        match &report.outcome {
            UrlOutcome::Downloaded { path } => println!("ok    {} -> {}", report.url, path.display()),
            UrlOutcome::NoImage => println!("skip  {} (no image)", report.url),
            UrlOutcome::FetchFailed { reason }
            | UrlOutcome::ParseFailed { reason }
            | UrlOutcome::DownloadFailed { reason } => {
                println!("fail  {} ({})", report.url, reason)
            }
        }
    }
    println!(
        "{} processed: {} downloaded, {} skipped, {} failed",
        summary.processed, summary.downloaded, summary.skipped, summary.failed
    );
}
