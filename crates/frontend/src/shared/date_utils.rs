/// Utilities for date and time formatting
///
/// Invoice headers follow the fr-FR browser convention.
use chrono::{Local, NaiveDateTime};

/// Current local wall-clock time
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Format datetime to DD/MM/YYYY
/// Example: 2026-03-05 14:02:26 -> "05/03/2026"
pub fn format_date_fr(datetime: &NaiveDateTime) -> String {
    datetime.format("%d/%m/%Y").to_string()
}

/// Format datetime to HH:MM:SS (24-hour)
/// Example: 2026-03-05 09:02:26 -> "09:02:26"
pub fn format_time_fr(datetime: &NaiveDateTime) -> String {
    datetime.format("%H:%M:%S").to_string()
}
