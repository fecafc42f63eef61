use std::{process::ExitCode, sync::Arc};

use crate::{
    booking_submitter::BookingSubmitter,
    configuration::Configuration,
    configuration_handler::{Command, ConfigurationHandler},
    http::HttpBackend,
    schedule_viewer::ScheduleViewer,
    slot_selector::SlotSelector,
    terminal::{TerminalDialog, TerminalNotifier, TerminalTimeSelect},
    types::BookingForm,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod backend;
mod booking_submitter;
mod configuration;
mod configuration_handler;
mod error;
mod http;
mod messages;
mod schedule_viewer;
mod slot_selector;
mod terminal;
#[cfg(test)]
mod testutils;
mod types;
mod view;

#[tokio::main]
async fn main() -> ExitCode {
    let configuration = ConfigurationHandler::parse_arguments();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configuration.log_level()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let backend = match HttpBackend::new(&configuration) {
        Ok(backend) => backend,
        Err(err) => {
            error!(?err, "Failed to set up the booking client");
            return ExitCode::FAILURE;
        }
    };
    info!(base_url = %configuration.base_url(), "Booking page ready");

    match configuration.command().clone() {
        Command::Slots {
            barbershop,
            employee,
            date,
        } => {
            let time_select = Arc::new(TerminalTimeSelect::default());
            let selector = SlotSelector::new(
                backend,
                barbershop,
                time_select.clone(),
                Arc::new(TerminalNotifier),
            );
            selector
                .on_selection_change(&employee, &Command::slot_date(&date))
                .await;
            time_select.print();
        }
        Command::Book { action, fields } => {
            let submitter = BookingSubmitter::new(backend, Arc::new(TerminalNotifier));
            let form = fields
                .into_iter()
                .fold(BookingForm::new(action), |form, (name, value)| {
                    form.with_field(name, value)
                });
            submitter.submit(&form).await;
        }
        Command::Schedule { employee, html } => {
            let viewer = ScheduleViewer::new(
                backend,
                Arc::new(TerminalDialog::new(html)),
                Arc::new(TerminalNotifier),
            );
            viewer.on_card_activated(&employee).await;
        }
    }

    ExitCode::SUCCESS
}
