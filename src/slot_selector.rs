use crate::backend::BookingBackend;
use crate::error::ApplicationError;
use crate::messages;
use crate::types::{SlotQuery, SlotResponse};
use crate::view::{Notifier, SelectEntry, TimeSelect};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tracing::{error, info, warn};

/// Keeps the time selector in step with the chosen employee and date.
pub struct SlotSelector<B: BookingBackend> {
    backend: B,
    barbershop_slug: String,
    time_select: Arc<dyn TimeSelect>,
    notifier: Arc<dyn Notifier>,
    generation: AtomicU64,
}

impl<B: BookingBackend> SlotSelector<B> {
    pub fn new(
        backend: B,
        barbershop_slug: impl Into<String>,
        time_select: Arc<dyn TimeSelect>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            backend,
            barbershop_slug: barbershop_slug.into(),
            time_select,
            notifier,
            generation: AtomicU64::new(0),
        }
    }

    /// Runs on page load and whenever the employee or the date changes.
    ///
    /// A newer call supersedes any request still in flight: its answer is
    /// dropped when it finally arrives.
    pub async fn on_selection_change(&self, employee_id: &str, date: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let query = SlotQuery::new(employee_id, date, self.barbershop_slug.as_str());

        self.time_select.clear();
        self.time_select.set_disabled(true);

        if !query.is_complete() {
            self.time_select
                .push(SelectEntry::placeholder(messages::SELECT_EMPLOYEE_AND_DATE));
            return;
        }

        self.time_select
            .push(SelectEntry::notice(messages::LOADING_SLOTS));

        let result = self.backend.available_slots(&query).await;
        if self.generation.load(Ordering::SeqCst) != generation {
            warn!(?query, ?result, "Dropping superseded slot response");
            return;
        }

        match result {
            Ok(response) => self.render_slots(response),
            Err(err) => {
                error!(?err, ?query, "Failed to load available slots");
                self.notifier.notify(messages::SLOTS_FAILED);
            }
        }
    }

    fn render_slots(&self, response: SlotResponse) {
        self.time_select.clear();
        self.time_select.set_disabled(false);

        match available_slots(response) {
            Ok(slots) => {
                self.time_select
                    .push(SelectEntry::placeholder(messages::SELECT_TIME));
                for slot in slots {
                    self.time_select.push(SelectEntry::slot(slot));
                }
            }
            Err(err) => {
                info!(?err, "No slots to offer");
                self.time_select
                    .push(SelectEntry::notice(err.notification_text()));
            }
        }
    }
}

fn available_slots(response: SlotResponse) -> Result<Vec<String>, ApplicationError> {
    if response.available_slots.is_empty() {
        return Err(ApplicationError::NoSlots {
            message: response.message,
        });
    }
    Ok(response.available_slots)
}
