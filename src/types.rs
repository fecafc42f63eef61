use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Employee and date picked on the booking page, scoped to one barbershop.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct SlotQuery {
    #[validate(length(min = 1))]
    pub employee_id: String,
    #[validate(length(min = 1))]
    pub date: String,
    pub barbershop_slug: String,
}

impl SlotQuery {
    pub fn new(
        employee_id: impl Into<String>,
        date: impl Into<String>,
        barbershop_slug: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            date: date.into(),
            barbershop_slug: barbershop_slug.into(),
        }
    }

    /// A query is only sent when both the employee and the date are filled in.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub available_slots: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The booking form as the page declares it: target URL plus its fields in
/// document order. The payload is opaque and sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub action: String,
    pub fields: Vec<(String, String)>,
}

impl BookingForm {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Map<String, Value>>,
}

impl BookingResult {
    /// Field errors in server order. Django reports a list of messages per
    /// field, so lists are joined into one line.
    pub fn field_errors(&self) -> Vec<(String, String)> {
        let Some(errors) = &self.errors else {
            return Vec::new();
        };
        errors
            .iter()
            .map(|(field, value)| (field.clone(), describe_field_error(value)))
            .collect()
    }
}

fn describe_field_error(value: &Value) -> String {
    match value {
        Value::String(message) => message.clone(),
        Value::Array(messages) => messages
            .iter()
            .map(describe_field_error)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub employee_id: String,
}

impl ScheduleQuery {
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: String,
    pub time: String,
    pub service: String,
}
