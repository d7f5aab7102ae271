//! Travel interval value object

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ClaimError;

/// The dates of a trip
///
/// A trip without an end date is still ongoing. When an end date is present
/// it never precedes the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TravelPeriodRecord")]
pub struct TravelPeriod {
    start: NaiveDate,
    end: Option<NaiveDate>,
}

impl TravelPeriod {
    /// Creates a travel period
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::InvalidRange` if `end` precedes `start`
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, ClaimError> {
        if let Some(end) = end {
            if end < start {
                return Err(ClaimError::InvalidRange { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// Creates a period for a trip that has not ended yet
    pub fn ongoing(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns true once the traveller has returned
    pub fn is_completed(&self) -> bool {
        self.end.is_some()
    }

    /// Whole days between the end of the trip and `today`
    ///
    /// `None` while the trip is ongoing. Negative when the end date lies
    /// after `today`.
    pub fn days_since_end(&self, today: NaiveDate) -> Option<i64> {
        self.end.map(|end| (today - end).num_days())
    }
}

#[derive(Deserialize)]
struct TravelPeriodRecord {
    start: NaiveDate,
    end: Option<NaiveDate>,
}

impl TryFrom<TravelPeriodRecord> for TravelPeriod {
    type Error = ClaimError;

    fn try_from(record: TravelPeriodRecord) -> Result<Self, Self::Error> {
        Self::new(record.start, record.end)
    }
}
