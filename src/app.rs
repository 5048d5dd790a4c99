// One interactive session: dates -> load -> window -> report.
use crate::analyzer::{Analyzer, AnalyzerImpl};
use crate::config::AppConfig;
use crate::filter::{DateRange, filter_by_range};
use crate::loader::{CsvLoader, Loader};
use crate::model::AppError;
use crate::presenter::{EMPTY_RANGE_MESSAGE, present};
use crate::prompt::ask_date_bounds;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Runs one analysis. `args` are the command line arguments after the
/// program name; the first two are taken as start and end dates, otherwise
/// both are asked for on `input`/`out`.
///
/// An unparseable date or an empty window prints the empty-range message and
/// is not an error.
pub fn run<R: BufRead, W: Write>(
    args: &[String],
    input: &mut R,
    out: &mut W,
    config: &AppConfig,
) -> Result<(), AppError> {
    let (start, end) = match args {
        [start, end, ..] => (start.clone(), end.clone()),
        _ => ask_date_bounds(input, out)?,
    };

    let points = CsvLoader::from_config(config)?.load()?;
    info!("Loaded {} price points", points.len());

    let range = match DateRange::parse(&start, &end) {
        Ok(r) => r,
        Err(e) => {
            warn!("{}", e);
            writeln!(out, "{}", EMPTY_RANGE_MESSAGE)?;
            return Ok(());
        }
    };

    let series = filter_by_range(&points, &range);
    info!(
        "{} points between {} and {}",
        series.len(),
        range.start,
        range.end
    );
    if series.is_empty() {
        writeln!(out, "{}", EMPTY_RANGE_MESSAGE)?;
        return Ok(());
    }

    let report = AnalyzerImpl::new().analyze(&series);
    present(out, config.output_format, &range, series.len(), &report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{END_PROMPT, START_PROMPT};
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn price_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1,2021-03-01,10,PLN").unwrap();
        writeln!(file, "2,2021-03-02,8,PLN").unwrap();
        writeln!(file, "3,2021-03-03,12,PLN").unwrap();
        file
    }

    fn config_for(file: &NamedTempFile) -> AppConfig {
        AppConfig {
            data_file: file.path().display().to_string(),
            ..AppConfig::default()
        }
    }

    fn session(args: &[&str], typed: &str, config: &AppConfig) -> String {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let mut input = Cursor::new(typed.to_string());
        let mut out = Vec::new();
        run(&args, &mut input, &mut out, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    const REPORT: &str = "\
1. Największy dzienny spadek wynosi - 2 i miał miejsce z dnia 2021-03-01 na 2021-03-02
2. Liczba okresów spadków cen wynosi - 1
3. Okres największego spadku trwał od 2021-03-01 do 2021-03-02 . Wyniósł on 2 i trwał 2 dni.
4. Nie występują żadne okresy stabilnej ceny w podanym zakresie dat. Najdłuższy okres jaki występuje jest to okres 1 dnia. Podaję cenę z pierwszego dnia z tego zakresu 8
";

    #[test]
    fn prompts_for_dates_without_args() {
        let file = price_file();
        let shown = session(&[], "2021-03-01\n2021-03-03\n", &config_for(&file));
        assert_eq!(shown, format!("{}{}{}", START_PROMPT, END_PROMPT, REPORT));
    }

    #[test]
    fn command_line_dates_skip_the_prompt() {
        let file = price_file();
        // typed answers would select nothing; they must not be read
        let shown = session(
            &["2021-03-01", "2021-03-03"],
            "2030-01-01\n2030-01-02\n",
            &config_for(&file),
        );
        assert_eq!(shown, REPORT);
    }

    #[test]
    fn single_arg_falls_back_to_prompt() {
        let file = price_file();
        let shown = session(&["2021-03-01"], "2021-03-01\n2021-03-03\n", &config_for(&file));
        assert!(shown.starts_with(START_PROMPT));
        assert!(shown.ends_with(REPORT));
    }

    #[test]
    fn malformed_date_prints_empty_range_message() {
        let file = price_file();
        let shown = session(&["2021-13-01", "2021-03-03"], "", &config_for(&file));
        assert_eq!(shown, format!("{}\n", EMPTY_RANGE_MESSAGE));
    }

    #[test]
    fn window_without_data_prints_empty_range_message() {
        let file = price_file();
        let shown = session(&["2020-01-01", "2020-12-31"], "", &config_for(&file));
        assert_eq!(shown, format!("{}\n", EMPTY_RANGE_MESSAGE));
    }

    #[test]
    fn unreadable_price_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_file: dir.path().join("missing.csv").display().to_string(),
            ..AppConfig::default()
        };
        let args = vec!["2021-03-01".to_string(), "2021-03-03".to_string()];
        let mut out = Vec::new();
        let err = run(&args, &mut Cursor::new(""), &mut out, &config).unwrap_err();
        assert!(matches!(err, AppError::Loader(_)));
        assert!(out.is_empty());
    }
}
