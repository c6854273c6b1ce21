//! A stand-in for `chrono::Utc` whose notion of "now" can be pinned
//! for the current thread.

use std::cell::Cell;
use ::chrono::{
    DateTime,
    TimeZone,
};

thread_local! {
    static NOW: Cell<Option<DateTime<::chrono::Utc>>> = const { Cell::new(None) };
}

pub struct Utc;

impl Utc {
    pub fn now() -> DateTime<::chrono::Utc> {
        NOW.with(|now| now.get())
            .unwrap_or_else(::chrono::Utc::now)
    }
}

/// Pins the clock of the current thread to the unix timestamp `secs`.
pub fn set_timestamp(secs: i64) {
    let value = ::chrono::Utc.timestamp_opt(secs, 0)
        .single()
        .expect("timestamp should be in range");
    NOW.with(|now| now.set(Some(value)));
}

pub fn reset() {
    NOW.with(|now| now.set(None));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pinned() {
        set_timestamp(1622505600);
        assert_eq!(Utc::now().timestamp(), 1622505600);
        reset();
        assert!(Utc::now().timestamp() > 1622505600);
    }
}
