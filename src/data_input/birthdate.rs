// src/data_input/birthdate.rs

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AgeError;
use crate::types::ElapsedSeconds;

/// Accepted birthdate layout.
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

// Unsigned four-digit year; month and day may drop the leading zero.
static BIRTHDATE_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("valid birthdate regex")
});

/// Parses a `YYYY-MM-DD` birthdate.
///
/// A single trailing line terminator left over from reading stdin is
/// stripped. Any other surrounding text makes the parse fail. The year must be
/// exactly four digits without a sign, and year 0 is rejected.
pub fn parse_birthdate(input: &str) -> Result<NaiveDate, AgeError> {
    let line = strip_line_terminator(input);
    if !BIRTHDATE_SHAPE_RE.is_match(line) {
        return Err(AgeError::MalformedDate {
            input: line.to_string(),
        });
    }

    let birthdate =
        NaiveDate::parse_from_str(line, BIRTHDATE_FORMAT).map_err(|source| AgeError::InvalidFormat {
            input: line.to_string(),
            source,
        })?;
    if birthdate.year() < 1 {
        return Err(AgeError::MalformedDate {
            input: line.to_string(),
        });
    }
    Ok(birthdate)
}

/// Whole seconds between midnight of the birthdate and `now`.
///
/// The difference is taken at full precision and truncated to whole seconds.
/// A birthdate after `now` is rejected.
pub fn alive_seconds_at(input: &str, now: NaiveDateTime) -> Result<ElapsedSeconds, AgeError> {
    let birthdate = parse_birthdate(input)?;
    let born_at = birthdate.and_time(NaiveTime::MIN);
    if now < born_at {
        return Err(AgeError::FutureBirthdate { birthdate });
    }

    let seconds = (now - born_at).num_seconds();
    debug!("event=alive_seconds birthdate={birthdate} now={now} seconds={seconds}");
    // `now >= born_at`, so the delta is non-negative.
    Ok(ElapsedSeconds::new(seconds.unsigned_abs()))
}

fn strip_line_terminator(input: &str) -> &str {
    match input.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => input,
    }
}
