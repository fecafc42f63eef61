//! Page surfaces the controllers draw on.
//!
//! Each controller receives its own handles at construction instead of
//! looking elements up globally, so a surface only ever sees updates from
//! the component that owns it.

use crate::messages;
use crate::types::ScheduleEntry;
use askama::Template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectEntry {
    pub label: String,
    pub value: Option<String>,
    pub disabled: bool,
}

impl SelectEntry {
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            disabled: false,
        }
    }

    pub fn slot(slot: impl Into<String>) -> Self {
        let slot = slot.into();
        Self {
            label: slot.clone(),
            value: Some(slot),
            disabled: false,
        }
    }

    pub fn notice(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            disabled: true,
        }
    }
}

/// The time selector of the booking form.
pub trait TimeSelect: Send + Sync {
    fn clear(&self);
    fn set_disabled(&self, disabled: bool);
    fn push(&self, entry: SelectEntry);
    fn entries(&self) -> Vec<SelectEntry>;
    fn is_disabled(&self) -> bool;
}

/// Blocking user-facing notification.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, text: &str);
}

/// Modal holding the schedule container.
pub trait ScheduleDialog: Send + Sync {
    fn render(&self, table: &ScheduleTable);
    fn show(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleRow {
    Appointment(ScheduleEntry),
    Empty(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTable {
    pub rows: Vec<ScheduleRow>,
}

impl ScheduleTable {
    pub const HEADER: [&'static str; 3] = ["Date", "Time", "Service"];

    pub fn from_entries(entries: Vec<ScheduleEntry>) -> Self {
        let rows = if entries.is_empty() {
            vec![ScheduleRow::Empty(messages::NO_APPOINTMENTS.to_string())]
        } else {
            entries.into_iter().map(ScheduleRow::Appointment).collect()
        };
        Self { rows }
    }

    /// Cell texts of each body row, in column order.
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| match row {
                ScheduleRow::Appointment(entry) => {
                    vec![entry.date.clone(), entry.time.clone(), entry.service.clone()]
                }
                ScheduleRow::Empty(text) => vec![text.clone()],
            })
            .collect()
    }

    pub fn to_html(&self) -> Result<String, askama::Error> {
        ScheduleTableTemplate {
            header: &Self::HEADER,
            rows: &self.rows,
        }
        .render()
    }
}

#[derive(Template)]
#[template(path = "schedule_table.html")]
struct ScheduleTableTemplate<'a> {
    header: &'a [&'static str],
    rows: &'a [ScheduleRow],
}
