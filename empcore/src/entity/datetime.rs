//! Conversion of date-like fields between the in-memory representation
//! and the ISO-8601 strings used on the wire.

use chrono::{
    DateTime,
    SecondsFormat,
    Utc,
};

/// Renders the value for transmission; absent values stay absent.
pub fn to_wire(value: Option<&DateTime<Utc>>) -> Option<String> {
    value.map(|value| value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Parses a value received from the server.  Empty strings and strings
/// that are not valid RFC 3339 timestamps are treated as absent.
pub fn from_wire(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value.filter(|value| !value.is_empty())?;
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            log::debug!("discarding unparseable timestamp {value:?}: {e}");
            None
        }
    }
}
