// Date window selection
use crate::model::{InputError, PricePoint};
use crate::utils::parse_date;
use chrono::NaiveDate;
use serde::Serialize;

/// Inclusive `[start, end]` window of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parses both bounds as `YYYY-MM-DD`. A reversed range is allowed and
    /// simply selects nothing.
    pub fn parse(start: &str, end: &str) -> Result<Self, InputError> {
        let parse = |raw: &str| {
            parse_date(raw).ok_or_else(|| InputError::InvalidDate(raw.trim().to_string()))
        };
        Ok(Self::new(parse(start)?, parse(end)?))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Keeps the points inside `range`, in their original order.
pub fn filter_by_range(points: &[PricePoint], range: &DateRange) -> Vec<PricePoint> {
    points
        .iter()
        .filter(|p| range.contains(p.date))
        .cloned()
        .collect()
}
