use crate::backend::BookingBackend;
use crate::messages;
use crate::types::ScheduleQuery;
use crate::view::{Notifier, ScheduleDialog, ScheduleTable};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tracing::{error, info, warn};

pub struct ScheduleViewer<B: BookingBackend> {
    backend: B,
    dialog: Arc<dyn ScheduleDialog>,
    notifier: Arc<dyn Notifier>,
    generation: AtomicU64,
}

impl<B: BookingBackend> ScheduleViewer<B> {
    pub fn new(backend: B, dialog: Arc<dyn ScheduleDialog>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            dialog,
            notifier,
            generation: AtomicU64::new(0),
        }
    }

    /// Handles a click on an employee card: loads the schedule, renders it and
    /// opens the dialog. Only the latest click is rendered.
    pub async fn on_card_activated(&self, employee_id: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if employee_id.is_empty() {
            warn!("Employee card without an employee id");
            self.notifier.notify(messages::SCHEDULE_FAILED);
            return;
        }

        let query = ScheduleQuery::new(employee_id);
        let result = self.backend.employee_schedule(&query).await;
        if self.generation.load(Ordering::SeqCst) != generation {
            warn!(?query, ?result, "Dropping superseded schedule response");
            return;
        }

        match result {
            Ok(entries) => {
                info!(employee_id, appointments = entries.len(), "Showing schedule");
                self.dialog.render(&ScheduleTable::from_entries(entries));
                self.dialog.show();
            }
            Err(err) => {
                error!(?err, ?query, "Failed to load employee schedule");
                self.notifier.notify(messages::SCHEDULE_FAILED);
            }
        }
    }
}
