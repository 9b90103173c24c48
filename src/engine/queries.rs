use chrono::NaiveDate;

use crate::model::Booking;

use super::{Engine, EngineError};

/// Date filter for booking listings. ISO dates order the same way as their
/// strings, so the inclusive range is a plain comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    On(NaiveDate),
    /// Inclusive on both ends.
    Between(NaiveDate, NaiveDate),
}

impl ListFilter {
    fn matches(&self, booking: &Booking) -> bool {
        match *self {
            ListFilter::All => true,
            ListFilter::On(date) => booking.date == date,
            ListFilter::Between(start, end) => start <= booking.date && booking.date <= end,
        }
    }
}

impl Engine {
    /// Bookings matching the filter, in stable storage order, from one
    /// consistent snapshot.
    pub async fn list_bookings(&self, filter: ListFilter) -> Result<Vec<Booking>, EngineError> {
        let store = self.store.read().await;
        let snapshot = store.load()?;
        Ok(snapshot
            .bookings
            .into_iter()
            .filter(|b| filter.matches(b))
            .collect())
    }
}
