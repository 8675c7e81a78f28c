use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_query_core::config::Config;
use transaction_query_core::engine::{FetchOrchestrator, TransactionView};
use transaction_query_core::filters::FilterState;
use transaction_query_core::transport::HttpTransport;

const USAGE: &str = "Usage: transaction-console [field=value ...] [log=level] > [output].csv
Fields: type, status, search, userId, dateFrom, dateTo, page, limit
Available log levels: error, warn, info, debug, trace (default: error)";

const CSV_HEADER: [&str; 11] = [
    "id", "user_id", "user_name", "phone", "type", "amount", "status", "date", "reference", "message", "investment_id"
];

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: Arguments are simple key=value pairs, so a CLI parsing crate would be overkill here
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        println!("{USAGE}");
        return Ok(());
    }

    let mut log_level = LevelFilter::ERROR;
    let mut filters = FilterState::new();

    for arg in &args {
        let Some((key, value)) = arg.split_once('=') else {
            eprintln!("Invalid argument '{arg}', expected field=value");
            eprintln!("{USAGE}");
            exit(1);
        };

        if key == "log" {
            log_level = parse_log_level(value);
            continue;
        }

        if let Err(error) = filters.set_field(key, value) {
            eprintln!("{error}");
            exit(1);
        }
    }

    setup_logging(log_level);

    let config = Config::from_env()?;
    info!("{} transactions console -> {}", config.branding.name, config.api_url);

    let transport = Arc::new(HttpTransport::from_config(&config)?);
    let mut orchestrator = FetchOrchestrator::new(transport).with_filters(filters);

    let timer = Instant::now();
    orchestrator.refresh().await?;
    let duration = timer.elapsed();

    info!("Fetched transactions in: {duration:?}");

    let view = orchestrator.view();

    if view.is_error() {
        error!("Transactions could not be loaded");
        eprintln!("Transactions could not be loaded");

        if let Some(support_url) = &config.branding.support_url {
            eprintln!("Contact support: {support_url}");
        }

        exit(2);
    }

    write_results_to_stdout(&view)?;
    write_summary_to_stderr(&view)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the CSV export, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout(view: &TransactionView) -> Result<()> {
    //NOTE: the header is written by hand so an empty page is still a valid CSV
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(stdout().lock()));

    writer.write_record(CSV_HEADER)?;

    for transaction in &view.transactions {
        writer.serialize(transaction)?;
    }

    writer.flush()?;

    Ok(())
}

fn write_summary_to_stderr(view: &TransactionView) -> Result<()> {
    let mut output = stderr().lock();
    let stats = &view.stats;
    let pagination = &view.pagination;

    writeln!(output, "{} (page {}/{})", pagination.label(), pagination.page, pagination.total_pages)?;
    writeln!(
        output,
        "total: {} | investment: {} | withdrawal: {} | bonus: {} | success: {} | pending: {} | failed: {}",
        stats.total,
        stats.investment,
        stats.withdrawal,
        stats.bonus,
        stats.success,
        stats.pending,
        stats.failed
    )?;

    Ok(())
}
