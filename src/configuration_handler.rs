use crate::configuration::Configuration;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "booking_page", about = "Barbershop booking page controllers")]
pub struct ConfigurationHandler {
    /// Origin serving the booking endpoints
    #[arg(long, env = "BOOKING_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Request timeout. Without it the HTTP client's default applies
    #[arg(long, env = "BOOKING_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Used when RUST_LOG is not set
    #[arg(long, env = "BOOKING_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Select an employee and a date and list the bookable times
    Slots {
        #[arg(long, env = "BOOKING_BARBERSHOP")]
        barbershop: String,
        #[arg(long, default_value = "")]
        employee: String,
        /// Defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Submit the booking form
    Book {
        #[arg(long)]
        action: String,
        /// Form field as name=value, repeatable, sent in the given order
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Open an employee's schedule
    Schedule {
        #[arg(long)]
        employee: String,
        /// Print the rendered table markup instead of plain rows
        #[arg(long)]
        html: bool,
    },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, _)) if name.is_empty() => Err(format!("missing field name in '{raw}'")),
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected name=value, got '{raw}'")),
    }
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                eprintln!("Ignoring unreadable .env file: {err}");
            }
        }
        Self::parse()
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

impl Command {
    pub fn slot_date(date: &Option<String>) -> String {
        match date {
            Some(date) => date.clone(),
            None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
        }
    }
}

impl Configuration for ConfigurationHandler {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    fn log_level(&self) -> String {
        self.log_level.clone()
    }
}
