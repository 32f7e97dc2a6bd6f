/// Birthday normalisation for inputs typed by hand
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::error::{Result, RosterError};

/// Normalise a birthday to the `YYYY-MM-DDTHH:MM:SS.sssZ` form the web client
/// produces.
///
/// Accepts a bare `YYYY-MM-DD` date (midnight UTC) or any RFC 3339 timestamp.
///
/// # Errors
///
/// Returns `InvalidInput` if the value is neither.
pub fn normalize_birthday(input: &str) -> Result<String> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| RosterError::invalid_input(format!("Invalid birthday: {input}")))?
            .and_utc();
        return Ok(midnight.to_rfc3339_opts(SecondsFormat::Millis, true));
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| {
            dt.with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        })
        .map_err(|e| RosterError::invalid_input(format!("Invalid birthday {input:?}: {e}")))
}
