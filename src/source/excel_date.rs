// src/source/excel_date.rs

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Largest serial Excel can represent (9999-12-31).
const MAX_SERIAL: f64 = 2_958_465.0;

/// Convert an Excel *serial* (1900 date system) into a naive date/time.
///
/// The epoch is 1899-12-30 so that serial 60 (the fictitious 1900-02-29)
/// lines up with every later date. Out-of-range or non-finite serials
/// yield `None`.
pub(crate) fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(1.0..=MAX_SERIAL).contains(&serial) {
        return None;
    }

    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let days = serial.trunc() as i64;
    let secs = ((serial - serial.trunc()) * 86400.0).round() as i64;

    excel_epoch.checked_add_signed(Duration::days(days) + Duration::seconds(secs))
}
