//! Command line front end for the AtsLink parser: reads one ATS or OLDI
//! message from a file or stdin, parses it and prints a report.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use atslink_models::FlightPlanRecord;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "atslink")]
#[command(version, about = "Parse an ICAO ATS or OLDI message")]
struct Cli {
    /// File containing the message; stdin is read when omitted.
    message_file: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Format {
    /// Human-readable diagnostics.
    Text,
    /// The full flight plan record as JSON.
    Json,
    /// The full flight plan record as XML.
    Xml,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let message = read_message(cli.message_file.as_deref())?;
    debug!(len = message.len(), "message read");

    let fpr = atslink_parser::parse(&message);
    match cli.format {
        Format::Text => print_text_report(&fpr),
        Format::Json => println!("{}", serde_json::to_string_pretty(&fpr)?),
        Format::Xml => print!("{}", fpr.as_xml()),
    }

    if fpr.errors_detected() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn read_message(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut message = String::new();
            std::io::stdin()
                .read_to_string(&mut message)
                .context("reading stdin")?;
            Ok(message)
        }
    }
}

fn print_text_report(fpr: &FlightPlanRecord) {
    if let Some(message_type) = fpr.message_type() {
        match fpr.message_title() {
            Some(title) => println!("{message_type} {title}"),
            None => println!("{message_type}"),
        }
    }
    for field in fpr.fields() {
        println!("  {:<20} {}", field.field_id.to_string(), field.text.trim());
    }
    if fpr.errors_detected() {
        println!("{} error(s):", fpr.errors().len());
        for error in fpr.errors() {
            println!("  [{}..{}] {}", error.start, error.end, error.message);
        }
    }
}
