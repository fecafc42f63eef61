use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    backend::BookingBackend,
    configuration::Configuration,
    error::TransportError,
    types::{BookingForm, BookingResult, ScheduleEntry, ScheduleQuery, SlotQuery, SlotResponse},
    view::{ScheduleDialog, ScheduleTable, SelectEntry, TimeSelect},
};

#[derive(Clone)]
pub struct TestConfiguration {
    base_url: String,
}

impl TestConfiguration {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Configuration for TestConfiguration {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }

    fn timeout(&self) -> Option<Duration> {
        None
    }

    fn log_level(&self) -> String {
        "debug".into()
    }
}

pub struct MockBookingBackendInner {
    pub success: AtomicBool,
    pub calls_to_available_slots: AtomicU64,
    pub calls_to_submit_booking: AtomicU64,
    pub calls_to_employee_schedule: AtomicU64,
    /// Keyed by date.
    pub slot_responses: Mutex<HashMap<String, SlotResponse>>,
    pub booking_result: Mutex<BookingResult>,
    pub submitted_forms: Mutex<Vec<BookingForm>>,
    /// Keyed by employee id.
    pub schedules: Mutex<HashMap<String, Vec<ScheduleEntry>>>,
    /// Response delay keyed by date (slots) or employee id (schedules).
    pub delays: Mutex<HashMap<String, Duration>>,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_available_slots: AtomicU64::default(),
            calls_to_submit_booking: AtomicU64::default(),
            calls_to_employee_schedule: AtomicU64::default(),
            slot_responses: Mutex::default(),
            booking_result: Mutex::default(),
            submitted_forms: Mutex::default(),
            schedules: Mutex::default(),
            delays: Mutex::default(),
        }
    }
}

impl MockBookingBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingBackendInner::new()))
    }

    pub fn fail(&self) {
        self.0.success.store(false, Ordering::SeqCst);
    }

    pub fn set_slots(&self, date: &str, response: SlotResponse) {
        self.0
            .slot_responses
            .lock()
            .unwrap()
            .insert(date.into(), response);
    }

    pub fn set_schedule(&self, employee_id: &str, schedule: Vec<ScheduleEntry>) {
        self.0
            .schedules
            .lock()
            .unwrap()
            .insert(employee_id.into(), schedule);
    }

    pub fn set_delay(&self, key: &str, delay: Duration) {
        self.0.delays.lock().unwrap().insert(key.into(), delay);
    }

    async fn respond<T>(&self, key: &str, value: T) -> Result<T, TransportError> {
        let delay = self.0.delays.lock().unwrap().get(key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(value),
            false => Err(TransportError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "Supposed to fail".into(),
            }),
        }
    }
}

#[async_trait]
impl BookingBackend for MockBookingBackend {
    async fn available_slots(&self, query: &SlotQuery) -> Result<SlotResponse, TransportError> {
        self.0
            .calls_to_available_slots
            .fetch_add(1, Ordering::SeqCst);
        let response = self
            .0
            .slot_responses
            .lock()
            .unwrap()
            .get(&query.date)
            .cloned()
            .unwrap_or_default();
        self.respond(&query.date, response).await
    }

    async fn submit_booking(&self, form: &BookingForm) -> Result<BookingResult, TransportError> {
        self.0.calls_to_submit_booking.fetch_add(1, Ordering::SeqCst);
        self.0.submitted_forms.lock().unwrap().push(form.clone());
        let result = self.0.booking_result.lock().unwrap().clone();
        self.respond(&form.action, result).await
    }

    async fn employee_schedule(
        &self,
        query: &ScheduleQuery,
    ) -> Result<Vec<ScheduleEntry>, TransportError> {
        self.0
            .calls_to_employee_schedule
            .fetch_add(1, Ordering::SeqCst);
        let schedule = self
            .0
            .schedules
            .lock()
            .unwrap()
            .get(&query.employee_id)
            .cloned()
            .unwrap_or_default();
        self.respond(&query.employee_id, schedule).await
    }
}

#[derive(Default)]
pub struct RecordingTimeSelect {
    entries: Mutex<Vec<SelectEntry>>,
    disabled: AtomicBool,
}

impl TimeSelect for RecordingTimeSelect {
    fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }

    fn push(&self, entry: SelectEntry) {
        self.entries.lock().unwrap().push(entry);
    }

    fn entries(&self) -> Vec<SelectEntry> {
        self.entries.lock().unwrap().clone()
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct RecordingDialog {
    pub rendered: Mutex<Option<ScheduleTable>>,
    pub calls_to_show: AtomicU64,
}

impl ScheduleDialog for RecordingDialog {
    fn render(&self, table: &ScheduleTable) {
        *self.rendered.lock().unwrap() = Some(table.clone());
    }

    fn show(&self) {
        self.calls_to_show.fetch_add(1, Ordering::SeqCst);
    }
}
