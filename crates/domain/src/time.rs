//! Timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `created_date`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_time_within_calling_window() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(before <= ts && ts <= after);
    }
}
