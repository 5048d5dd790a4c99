// Console rendering of an analysis report (fixed Polish wording).
use crate::analyzer::AnalysisReport;
use crate::config::OutputFormat;
use crate::filter::DateRange;
use crate::model::{DeclinePeriod, DropSummary, StablePeriod};
use crate::utils::{DATE_FORMAT, format_amount};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::{self, Write};

pub const EMPTY_RANGE_MESSAGE: &str =
    "W tym zakresie dat nie występują żadne dane, badź podano błędnie dane";

fn date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

fn value(v: Option<f64>) -> String {
    v.map_or_else(String::new, |v| v.to_string())
}

pub fn render_max_daily_drop(drop: &DropSummary) -> String {
    match drop.span {
        Some(span) if drop.amount != 0.0 => format!(
            "1. Największy dzienny spadek wynosi - {} i miał miejsce z dnia {} na {}",
            format_amount(drop.amount),
            date(span.start),
            date(span.end)
        ),
        _ => "1. Brak spadku ceny w tym okresie".to_string(),
    }
}

pub fn render_drop_period_count(count: usize) -> String {
    format!("2. Liczba okresów spadków cen wynosi - {}", count)
}

pub fn render_max_drop_period(period: &DeclinePeriod) -> String {
    match period.span {
        Some(span) if period.total_decline != 0.0 => format!(
            "3. Okres największego spadku trwał od {} do {} . Wyniósł on {} i trwał {} dni.",
            date(span.start),
            date(span.end),
            format_amount(period.total_decline),
            period.duration_days
        ),
        _ => "3. W tym okresie nie było żadnych okresów spadków cen".to_string(),
    }
}

pub fn render_longest_stable_period(stable: &StablePeriod) -> String {
    match stable.span {
        Some(span) if !stable.is_single_day() => format!(
            "4. Najdłuższy okres stabilnej ceny trwał od {} do {} . Trwał on {} dni, a wartość akcji wynosiła {}",
            date(span.start),
            date(span.end),
            stable.length,
            value(stable.value)
        ),
        _ => format!(
            "4. Nie występują żadne okresy stabilnej ceny w podanym zakresie dat. Najdłuższy okres jaki występuje jest to okres 1 dnia. Podaję cenę z pierwszego dnia z tego zakresu {}",
            value(stable.value)
        ),
    }
}

/// One line per metric, in report order.
pub fn render_text(report: &AnalysisReport) -> Vec<String> {
    vec![
        render_max_daily_drop(&report.max_daily_drop),
        render_drop_period_count(report.drop_period_count),
        render_max_drop_period(&report.max_drop_period),
        render_longest_stable_period(&report.longest_stable_period),
    ]
}

#[derive(Serialize)]
struct JsonReport<'a> {
    range: &'a DateRange,
    points: usize,
    #[serde(flatten)]
    report: &'a AnalysisReport,
}

pub fn render_json(
    range: &DateRange,
    points: usize,
    report: &AnalysisReport,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        range,
        points,
        report,
    })
}

/// Writes the report to `out` in the configured format.
pub fn present<W: Write>(
    out: &mut W,
    format: OutputFormat,
    range: &DateRange,
    points: usize,
    report: &AnalysisReport,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for line in render_text(report) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            let json = render_json(range, points, report).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
