//! Day-count serial → `dd/mm/yyyy` conversion
//!
//! Serial 1 is 1 January 1900. The format family treats 1900 as a leap year,
//! so serial 60 is the non-existent 29 February 1900 and every serial from 61
//! onward is one day ahead of a plain day count from 31 December 1899.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Serial of the fictitious 29 February 1900
pub const PHANTOM_LEAP_DAY: f64 = 60.0;

/// Largest convertible serial (31 December 9999)
pub const MAX_SERIAL: f64 = 2_958_465.0;

/// Epoch for serials before the phantom leap day: the day before 1 January 1900.
fn early_epoch() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1899, 12, 31)?.and_hms_opt(0, 0, 0)
}

/// Epoch for serials after the phantom leap day, one day earlier to absorb it.
fn late_epoch() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)
}

/// Convert a date serial to `dd/mm/yyyy`
///
/// The time-of-day fraction is dropped before the range check, so any time
/// on 31 December 9999 still converts. Returns `None` for serials that are
/// negative, non-finite or whose day is past [`MAX_SERIAL`].
pub fn serial_to_date_string(serial: f64) -> Option<String> {
    if !serial.is_finite() || serial < 0.0 || serial.trunc() > MAX_SERIAL {
        return None;
    }

    if serial.trunc() == PHANTOM_LEAP_DAY {
        return Some("29/02/1900".to_string());
    }

    let epoch = if serial < PHANTOM_LEAP_DAY {
        early_epoch()?
    } else {
        late_epoch()?
    };

    let offset_ms = (serial * MS_PER_DAY as f64) as i64;
    let instant = epoch.checked_add_signed(Duration::milliseconds(offset_ms))?;

    Some(instant.date().format("%d/%m/%Y").to_string())
}
