use crate::backend::BookingBackend;
use crate::error::ApplicationError;
use crate::messages;
use crate::types::{BookingForm, BookingResult};
use crate::view::Notifier;
use std::sync::Arc;
use tracing::{error, info};

/// Takes over the booking form's native submission.
pub struct BookingSubmitter<B: BookingBackend> {
    backend: B,
    notifier: Arc<dyn Notifier>,
}

impl<B: BookingBackend> BookingSubmitter<B> {
    pub fn new(backend: B, notifier: Arc<dyn Notifier>) -> Self {
        Self { backend, notifier }
    }

    /// Posts the form to its action and reports the outcome. The form is left
    /// untouched either way.
    pub async fn submit(&self, form: &BookingForm) {
        match self.backend.submit_booking(form).await {
            Ok(result) => match booking_outcome(result) {
                Ok(message) => {
                    info!("Booking accepted");
                    self.notifier
                        .notify(message.as_deref().unwrap_or(messages::BOOKING_SUCCEEDED));
                }
                Err(err) => {
                    info!(?err, "Booking rejected");
                    self.notifier.notify(&err.notification_text());
                }
            },
            Err(err) => {
                error!(?err, action = %form.action, "Failed to submit booking");
                self.notifier.notify(messages::BOOKING_FAILED);
            }
        }
    }
}

fn booking_outcome(result: BookingResult) -> Result<Option<String>, ApplicationError> {
    if result.success {
        return Ok(result.message);
    }
    Err(ApplicationError::Rejected {
        errors: result.field_errors(),
        message: result.message,
    })
}
