use chrono::{
    DateTime,
    NaiveDateTime,
    Utc,
};

/// The format date-time inputs are edited in.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// The editable state of an entity, held as the values an input form
/// would carry.
pub trait EntityForm<E>: Default + Send {
    /// Replaces the form values with those of `entity`.
    fn update_form(&mut self, entity: &E);
    /// Builds an entity out of the current form values.
    fn create_from_form(&self) -> E;
}

pub fn format_date_time(value: &DateTime<Utc>) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Values that don't match `DATE_TIME_FORMAT` are treated as absent.
pub fn parse_date_time(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .ok()
        .map(|value| DateTime::from_naive_utc_and_offset(value, Utc))
}
