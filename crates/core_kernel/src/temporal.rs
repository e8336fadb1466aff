//! Stay period handling for reservations
//!
//! A stay is a half-open date range `[check_in, check_out)`: the guest
//! occupies the apartment on the check-in night but not the check-out night.
//! The database enforces the same semantics with a range exclusion
//! constraint, so the overlap rules here and in SQL agree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to stay period construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid stay period: check-in {check_in} must be before check-out {check_out}")]
    InvalidPeriod {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

/// A half-open stay period `[check_in, check_out)`
///
/// The constructor guarantees at least one night, mirroring the schema's
/// `CHECK (end_date > start_date)` constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayPeriod {
    /// Creates a new stay period
    ///
    /// # Errors
    ///
    /// Returns `TemporalError::InvalidPeriod` if the check-out date is not
    /// strictly after the check-in date.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, TemporalError> {
        if check_in >= check_out {
            return Err(TemporalError::InvalidPeriod {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// The check-in date (inclusive)
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// The check-out date (exclusive)
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights in the stay, always at least 1
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Returns true if the two stays share at least one night
    ///
    /// Half-open semantics: a stay checking out on the day another checks in
    /// does not overlap it.
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Returns true if the stay has ended on or before the given date
    ///
    /// Used for the review rule: a customer may only review an apartment
    /// after a completed stay.
    pub fn ended_by(&self, date: NaiveDate) -> bool {
        self.check_out <= date
    }

    /// Returns true if the given night falls within the stay
    pub fn contains(&self, night: NaiveDate) -> bool {
        self.check_in <= night && night < self.check_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_night_stay_rejected() {
        let d = date(2024, 5, 1);
        assert!(StayPeriod::new(d, d).is_err());
    }

    #[test]
    fn test_back_to_back_stays_do_not_overlap() {
        let first = StayPeriod::new(date(2024, 5, 1), date(2024, 5, 4)).unwrap();
        let second = StayPeriod::new(date(2024, 5, 4), date(2024, 5, 8)).unwrap();
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }
}
