use crate::error::TransportError;
use crate::types::{BookingForm, BookingResult, ScheduleEntry, ScheduleQuery, SlotQuery, SlotResponse};
use async_trait::async_trait;

#[async_trait]
pub trait BookingBackend: Clone + Send + Sync + 'static {
    async fn available_slots(&self, query: &SlotQuery) -> Result<SlotResponse, TransportError>;
    async fn submit_booking(&self, form: &BookingForm) -> Result<BookingResult, TransportError>;
    async fn employee_schedule(
        &self,
        query: &ScheduleQuery,
    ) -> Result<Vec<ScheduleEntry>, TransportError>;
}
