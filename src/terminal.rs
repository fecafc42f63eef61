//! Console rendition of the booking page surfaces.

use crate::view::{Notifier, ScheduleDialog, ScheduleTable, SelectEntry, TimeSelect};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};
use tracing::error;

#[derive(Default)]
pub struct TerminalTimeSelect {
    entries: Mutex<Vec<SelectEntry>>,
    disabled: AtomicBool,
}

impl TerminalTimeSelect {
    pub fn print(&self) {
        let state = if self.is_disabled() { " (disabled)" } else { "" };
        println!("Time{state}:");
        for entry in self.entries() {
            println!("{}", format_entry(&entry));
        }
    }
}

fn format_entry(entry: &SelectEntry) -> String {
    match (&entry.value, entry.disabled) {
        (Some(value), _) => format!("  [{value}]"),
        (None, true) => format!("  - {} -", entry.label),
        (None, false) => format!("  {}", entry.label),
    }
}

impl TimeSelect for TerminalTimeSelect {
    fn clear(&self) {
        self.entries.lock().unwrap_or_else(|err| err.into_inner()).clear();
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }

    fn push(&self, entry: SelectEntry) {
        self.entries
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .push(entry);
    }

    fn entries(&self) -> Vec<SelectEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .clone()
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }
}

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, text: &str) {
        println!("! {}", text.trim_end());
    }
}

pub struct TerminalDialog {
    html: bool,
    rendered: Mutex<String>,
}

impl TerminalDialog {
    pub fn new(html: bool) -> Self {
        Self {
            html,
            rendered: Mutex::default(),
        }
    }
}

fn format_table(table: &ScheduleTable) -> String {
    let mut text = ScheduleTable::HEADER.join(" | ");
    for row in table.cells() {
        text.push('\n');
        text.push_str(&row.join(" | "));
    }
    text
}

impl ScheduleDialog for TerminalDialog {
    fn render(&self, table: &ScheduleTable) {
        let rendered = match self.html {
            true => table.to_html().unwrap_or_else(|err| {
                error!(?err, "Failed to render schedule table");
                format_table(table)
            }),
            false => format_table(table),
        };
        *self.rendered.lock().unwrap_or_else(|err| err.into_inner()) = rendered;
    }

    fn show(&self) {
        println!("{}", self.rendered.lock().unwrap_or_else(|err| err.into_inner()));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::ScheduleEntry;

    #[test]
    fn test_format_entries() {
        assert_eq!(format_entry(&SelectEntry::slot("10:00")), "  [10:00]");
        assert_eq!(
            format_entry(&SelectEntry::notice("No times available")),
            "  - No times available -"
        );
        assert_eq!(
            format_entry(&SelectEntry::placeholder("Select a time")),
            "  Select a time"
        );
    }

    #[test]
    fn test_format_table() {
        let table = ScheduleTable::from_entries(vec![ScheduleEntry {
            date: "2024-01-01".into(),
            time: "10:00".into(),
            service: "Haircut".into(),
        }]);
        assert_eq!(
            format_table(&table),
            "Date | Time | Service\n2024-01-01 | 10:00 | Haircut"
        );
    }

    #[test]
    fn test_dialog_keeps_last_render() {
        let dialog = TerminalDialog::new(true);
        dialog.render(&ScheduleTable::from_entries(vec![]));
        assert!(dialog.rendered.lock().unwrap().starts_with("<table class=\"table\">"));
    }
}
