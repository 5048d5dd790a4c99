// Core structs: PricePoint, scan results, layer errors
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// One row of the price file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub id: u64,
    pub date: NaiveDate,
    pub value: f64,
    pub currency: String,
}

impl PricePoint {
    pub fn new(id: u64, date: NaiveDate, value: f64, currency: impl Into<String>) -> Self {
        Self {
            id,
            date,
            value,
            currency: currency.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Inclusive day-count: both bounds are part of the span.
    pub fn inclusive_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Largest single-step drop. `span` is `None` when nothing ever fell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DropSummary {
    pub amount: f64,
    pub span: Option<DateSpan>,
}

impl DropSummary {
    pub fn none() -> Self {
        Self {
            amount: 0.0,
            span: None,
        }
    }
}

/// Declining run with the greatest cumulative loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeclinePeriod {
    pub total_decline: f64,
    pub span: Option<DateSpan>,
    pub duration_days: i64,
}

impl DeclinePeriod {
    pub fn none() -> Self {
        Self {
            total_decline: 0.0,
            span: None,
            duration_days: 0,
        }
    }
}

/// Longest run of consecutive equal values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StablePeriod {
    pub length: usize,
    pub value: Option<f64>,
    pub span: Option<DateSpan>,
}

impl StablePeriod {
    /// A run of one point carries no real stability.
    pub fn is_single_day(&self) -> bool {
        self.span.is_none_or(|s| s.start == s.end)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),
}

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot open price file: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("record {record}: missing field `{field}`")]
    MissingField { record: usize, field: &'static str },
    #[error("record {record}: invalid id {raw:?}")]
    InvalidId { record: usize, raw: String },
    #[error("record {record}: invalid date {raw:?}")]
    InvalidDate { record: usize, raw: String },
    #[error("record {record}: invalid value {raw:?}")]
    InvalidValue { record: usize, raw: String },
    #[error("record {record}: expected {expected} fields, found {found}")]
    ExtraFields {
        record: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("cannot write report: {0}")]
    Output(#[from] std::io::Error),
}
