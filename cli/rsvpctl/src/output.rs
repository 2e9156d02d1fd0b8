//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// One gate's verdict.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct GateRow {
    pub gate: &'static str,
    pub outcome: &'static str,
    pub detail: String,
}

/// Result of checking one transition.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub operation: String,
    pub accepted: bool,
    pub gates: Vec<GateRow>,
}

pub fn print_report(report: &Report, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{}", Table::new(&report.gates));
            if report.accepted {
                println!("{} {} accepted", "Success:".green().bold(), report.operation);
            } else {
                println!("{} {} refused", "Refused:".red().bold(), report.operation);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(_) => println!("{{}}"),
        },
    }
}
