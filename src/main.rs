//! CLI entry point for the report card tool.
//!
//! Loads a student's report card payload (or the built-in sample), validates
//! it, and prints it as text, as a table, or as JSON, or exports it to CSV.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use report_card::output::{append_records, to_json};
use report_card::render::{render_text, write_table};
use report_card::{ReportCard, ReportCardInput, School};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "report_card")]
#[command(about = "Grade a student's year and print the report card", long_about = None)]
struct Cli {
    /// JSON file with the school name, academic year and scale
    #[arg(long, global = true, value_name = "FILE")]
    school: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a report card
    Show {
        /// Report card JSON payload (defaults to the built-in sample)
        #[arg(short, long, value_name = "FILE")]
        input: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Append one CSV row per course to a file
    Export {
        /// Report card JSON payload (defaults to the built-in sample)
        #[arg(short, long, value_name = "FILE")]
        input: Option<String>,

        /// CSV file to append results to
        #[arg(short, long, default_value = "report_card.csv")]
        output: String,
    },
    /// Print the built-in sample card in both text and table form
    Demo,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/report_card.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("report_card.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let school = match &cli.school {
        Some(path) => School::load(path)?,
        None => School::default(),
    }
    .with_env_overrides();

    match cli.command {
        Commands::Show { input, format } => {
            let card = load_card(input.as_deref())?;
            match format {
                Format::Text => println!("{}", render_text(&card, &school)?),
                Format::Table => write_table(&card, &school, &mut std::io::stdout().lock())?,
                Format::Json => println!("{}", to_json(&card, &school)?),
            }
        }
        Commands::Export { input, output } => {
            let card = load_card(input.as_deref())?;
            append_records(&output, &card)?;
        }
        Commands::Demo => {
            let card = ReportCard::try_from(sample_input())?;
            println!("{}\n\n", render_text(&card, &school)?);
            write_table(&card, &school, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Loads and validates a payload from `path`, or falls back to the sample.
#[tracing::instrument]
fn load_card(path: Option<&str>) -> Result<ReportCard> {
    let input = match path {
        Some(path) => ReportCardInput::load(path)?,
        None => sample_input(),
    };
    let card = ReportCard::try_from(input)?;
    info!(
        student = %card.name(),
        courses = card.courses().len(),
        "Report card loaded"
    );
    Ok(card)
}

fn sample_input() -> ReportCardInput {
    ReportCardInput {
        name: "Robert".to_string(),
        grade_level: "7".to_string(),
        courses: vec![
            "Science".to_string(),
            "Mathematics".to_string(),
            "Computer Science".to_string(),
        ],
        scores: vec![
            vec![95.75, 100.0, 98.85, 99.5],
            vec![100.0, 98.0, 100.0, 100.0],
            vec![100.0, 100.0, 100.0, 100.0],
        ],
        days_absent: [0, 0, 0, 0],
        times_tardy: [0, 1, 0, 0],
    }
}
