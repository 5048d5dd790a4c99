// Single-pass scans over a date-ascending price series.
//
// Every scan folds over adjacent pairs. A series with fewer than two points
// has no pairs and yields the scan's "nothing found" result.
use crate::model::{DateSpan, DeclinePeriod, DropSummary, PricePoint, StablePeriod};
use chrono::NaiveDate;

/// Direction of one step between neighbouring points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Down,
    Up,
    /// Equal values, or values that do not compare (NaN).
    Flat,
}

impl Step {
    fn between(prev: &PricePoint, cur: &PricePoint) -> Self {
        if cur.value < prev.value {
            Step::Down
        } else if cur.value > prev.value {
            Step::Up
        } else {
            Step::Flat
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Outside,
    Inside,
}

/// Biggest day-over-day loss. Ties keep the earliest pair.
pub fn max_daily_drop(series: &[PricePoint]) -> DropSummary {
    series.windows(2).fold(DropSummary::none(), |best, pair| {
        let (prev, cur) = (&pair[0], &pair[1]);
        let drop = prev.value - cur.value;
        if drop > best.amount {
            DropSummary {
                amount: drop,
                span: Some(DateSpan::new(prev.date, cur.date)),
            }
        } else {
            best
        }
    })
}

/// Number of maximal declining runs.
///
/// Equal steps do not change the run state; only a rise closes a run.
/// A run still open at the end of the series is not counted.
pub fn count_drop_periods(series: &[PricePoint]) -> usize {
    let (count, state) = series
        .windows(2)
        .fold((0usize, RunState::Outside), |(count, state), pair| {
            match (Step::between(&pair[0], &pair[1]), state) {
                (Step::Down, RunState::Outside) => (count + 1, RunState::Inside),
                (Step::Up, _) => (count, RunState::Outside),
                _ => (count, state),
            }
        });

    match state {
        // The open run was counted when it started, so count >= 1 here.
        RunState::Inside => count - 1,
        RunState::Outside => count,
    }
}

#[derive(Debug, Clone, Copy)]
struct DeclineRun {
    start: NaiveDate,
    total: f64,
}

#[derive(Debug, Clone, Copy)]
struct DeclineScan {
    best: Option<(DeclineRun, NaiveDate)>,
    current: Option<DeclineRun>,
}

impl DeclineScan {
    fn best_total(&self) -> f64 {
        self.best.map_or(0.0, |(run, _)| run.total)
    }

    /// Closes `current` at `end`, keeping it only when strictly larger.
    fn close(mut self, end: NaiveDate) -> Self {
        if let Some(run) = self.current.take() {
            if run.total > self.best_total() {
                self.best = Some((run, end));
            }
        }
        self
    }
}

/// Declining run with the largest cumulative loss (not the longest one).
///
/// A rise or an equal step ends the run. On equal totals the earlier run wins.
pub fn max_drop_period(series: &[PricePoint]) -> DeclinePeriod {
    let scan = series.windows(2).fold(
        DeclineScan {
            best: None,
            current: None,
        },
        |mut scan, pair| {
            let (prev, cur) = (&pair[0], &pair[1]);
            match Step::between(prev, cur) {
                Step::Down => {
                    let run = scan.current.get_or_insert(DeclineRun {
                        start: prev.date,
                        total: 0.0,
                    });
                    run.total += prev.value - cur.value;
                    scan
                }
                Step::Up | Step::Flat => scan.close(prev.date),
            }
        },
    );

    let scan = match series.last() {
        Some(last) => scan.close(last.date),
        None => scan,
    };

    match scan.best {
        Some((run, end)) => {
            let span = DateSpan::new(run.start, end);
            DeclinePeriod {
                total_decline: run.total,
                span: Some(span),
                duration_days: span.inclusive_days(),
            }
        }
        None => DeclinePeriod::none(),
    }
}

#[derive(Debug, Clone, Copy)]
struct StableScan {
    best: StablePeriod,
    run_len: usize,
    run_start: Option<NaiveDate>,
}

impl StableScan {
    fn record(&mut self, last: &PricePoint) {
        self.best = StablePeriod {
            length: self.run_len,
            value: Some(last.value),
            span: Some(DateSpan::new(
                self.run_start.unwrap_or(last.date),
                last.date,
            )),
        };
    }
}

/// Longest run of consecutive equal values.
///
/// Inside the series a run replaces an equally long earlier one, so the most
/// recent tie wins. The run still open at the end must be strictly longer
/// to replace the best one.
pub fn longest_stable_period(series: &[PricePoint]) -> StablePeriod {
    let mut scan = series.windows(2).fold(
        StableScan {
            best: StablePeriod {
                length: 0,
                value: None,
                span: None,
            },
            run_len: 1,
            run_start: None,
        },
        |mut scan, pair| {
            let (prev, cur) = (&pair[0], &pair[1]);
            if cur.value == prev.value {
                scan.run_len += 1;
                if scan.run_len == 2 {
                    scan.run_start = Some(prev.date);
                }
            } else {
                if scan.run_len >= scan.best.length {
                    scan.record(prev);
                }
                scan.run_len = 1;
                scan.run_start = None;
            }
            scan
        },
    );

    if let Some(last) = series.last() {
        if scan.run_len > scan.best.length {
            scan.record(last);
        }
    }

    scan.best
}
