use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A period of leave, bounded by two timestamps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vacation {
    pub id: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// The JSON representation of a `Vacation`, with the timestamps kept as
/// the raw ISO-8601 strings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

mod impls;
