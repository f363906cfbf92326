//! Boundary to whatever owns the punch records (local database, remote service...).

use crate::errors::AppResult;
use crate::models::date_range::DateRange;
use crate::models::punch::PunchEvent;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait PunchSource: Send + Sync {
    /// Punches whose local calendar day falls inside `range`, in any order.
    async fn fetch_punches(&self, range: DateRange) -> AppResult<Vec<PunchEvent>>;

    async fn fetch_day(&self, day: NaiveDate) -> AppResult<Vec<PunchEvent>> {
        self.fetch_punches(DateRange::single(day)).await
    }
}
