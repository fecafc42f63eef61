use crate::backend::BookingBackend;
use crate::configuration::Configuration;
use crate::error::TransportError;
use crate::types::{BookingForm, BookingResult, ScheduleEntry, ScheduleQuery, SlotQuery, SlotResponse};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new<C: Configuration>(configuration: &C) -> Result<Self, TransportError> {
        let base_url = configuration.base_url();
        let base_url = Url::parse(&base_url).map_err(|err| TransportError::InvalidUrl {
            url: base_url.clone(),
            reason: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not usable as a base url".into(),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = configuration.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Builds `{base}/{segments...}/`, percent-encoding every segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("");
        }
        url
    }

    fn slots_url(&self, query: &SlotQuery) -> Url {
        self.endpoint(&[
            "booking",
            &query.barbershop_slug,
            "get-available-slots",
            &query.employee_id,
            &query.date,
        ])
    }

    fn schedule_url(&self, query: &ScheduleQuery) -> Url {
        self.endpoint(&["booking", "barbershop", "employee", &query.employee_id, "schedule"])
    }

    fn action_url(&self, action: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(action)
            .map_err(|err| TransportError::InvalidUrl {
                url: action.to_string(),
                reason: err.to_string(),
            })
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TransportError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status { status, body });
        }

        debug!(%status, %body, "Received response");
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl BookingBackend for HttpBackend {
    async fn available_slots(&self, query: &SlotQuery) -> Result<SlotResponse, TransportError> {
        let url = self.slots_url(query);
        info!(%url, "Fetching available slots");
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    async fn submit_booking(&self, form: &BookingForm) -> Result<BookingResult, TransportError> {
        let url = self.action_url(&form.action)?;
        info!(%url, fields = form.fields.len(), "Submitting booking form");
        let response = self.client.post(url).form(&form.fields).send().await?;
        Self::handle_response(response).await
    }

    async fn employee_schedule(
        &self,
        query: &ScheduleQuery,
    ) -> Result<Vec<ScheduleEntry>, TransportError> {
        let url = self.schedule_url(query);
        info!(%url, "Fetching employee schedule");
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }
}
