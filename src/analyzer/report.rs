use crate::analyzer::series_scan::{
    count_drop_periods, longest_stable_period, max_daily_drop, max_drop_period,
};
use crate::model::{DeclinePeriod, DropSummary, PricePoint, StablePeriod};
use serde::Serialize;
use tracing::debug;

/// Trait defining the interface for a price series analyzer.
pub trait Analyzer {
    /// Runs every scan over the same series, in presentation order.
    fn analyze(&self, series: &[PricePoint]) -> AnalysisReport;
}

/// Implementation of the series analyzer.
pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnalyzerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for AnalyzerImpl {
    fn analyze(&self, series: &[PricePoint]) -> AnalysisReport {
        debug!("Analyzing {} price points", series.len());

        let report = AnalysisReport {
            max_daily_drop: max_daily_drop(series),
            drop_period_count: count_drop_periods(series),
            max_drop_period: max_drop_period(series),
            longest_stable_period: longest_stable_period(series),
        };

        debug!(
            "Drop {:.2}, {} drop periods, worst decline {:.2}, longest stable run {}",
            report.max_daily_drop.amount,
            report.drop_period_count,
            report.max_drop_period.total_decline,
            report.longest_stable_period.length
        );
        report
    }
}

/// Structure representing the overall analysis result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Biggest single day-over-day drop.
    pub max_daily_drop: DropSummary,
    /// Number of completed declining runs.
    pub drop_period_count: usize,
    /// Declining run with the largest cumulative loss.
    pub max_drop_period: DeclinePeriod,
    /// Longest run of an unchanged price.
    pub longest_stable_period: StablePeriod,
}
