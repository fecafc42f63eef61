pub const LOADING_SLOTS: &str = "Loading available times...";
pub const SELECT_TIME: &str = "Select a time";
pub const NO_SLOTS: &str = "No times available";
pub const SELECT_EMPLOYEE_AND_DATE: &str = "Select an employee and a date";
pub const SLOTS_FAILED: &str = "Failed to load available times. Please try again.";

pub const BOOKING_SUCCEEDED: &str = "Appointment booked successfully!";
pub const BOOKING_FORM_ERRORS: &str = "Form errors:";
pub const BOOKING_REJECTED: &str = "Could not complete the booking. Please try again.";
pub const BOOKING_FAILED: &str = "Failed to submit the booking. Please try again.";

pub const SCHEDULE_FAILED: &str = "Failed to load the schedule. Please try again.";
pub const NO_APPOINTMENTS: &str = "No appointments found.";
