// CSV price file loading
use crate::config::AppConfig;
use crate::loader::Loader;
use crate::model::{ConfigError, LoaderError, PricePoint};
use crate::normalizer::parse_value;
use crate::utils::parse_date;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

const FIELD_COUNT: usize = 4;

/// Reads `id,date,value,currency` rows.
pub struct CsvLoader {
    path: PathBuf,
    delimiter: u8,
    has_headers: bool,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
            has_headers: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            path: PathBuf::from(&config.data_file),
            delimiter: config.delimiter_byte()?,
            has_headers: config.has_headers,
        })
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Parses CSV content from any reader, keeping row order.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Vec<PricePoint>, LoaderError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut points = Vec::new();
        for (index, result) in rdr.records().enumerate() {
            let record = result?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            points.push(parse_record(&record, index + 1)?);
        }

        debug!("Parsed {} price rows", points.len());
        Ok(points)
    }
}

impl Loader for CsvLoader {
    fn load(&self) -> Result<Vec<PricePoint>, LoaderError> {
        info!("Loading prices from {}", self.path.display());
        let file = File::open(&self.path)?;
        self.parse_reader(file)
    }
}

fn field<'a>(
    record: &'a StringRecord,
    idx: usize,
    name: &'static str,
    record_no: usize,
) -> Result<&'a str, LoaderError> {
    record.get(idx).ok_or(LoaderError::MissingField {
        record: record_no,
        field: name,
    })
}

fn parse_record(record: &StringRecord, record_no: usize) -> Result<PricePoint, LoaderError> {
    if record.len() > FIELD_COUNT {
        return Err(LoaderError::ExtraFields {
            record: record_no,
            expected: FIELD_COUNT,
            found: record.len(),
        });
    }

    let id_raw = field(record, 0, "id", record_no)?;
    let date_raw = field(record, 1, "date", record_no)?;
    let value_raw = field(record, 2, "value", record_no)?;
    let currency = field(record, 3, "currency", record_no)?;

    let id = id_raw.parse::<u64>().map_err(|_| LoaderError::InvalidId {
        record: record_no,
        raw: id_raw.to_string(),
    })?;
    let date = parse_date(date_raw).ok_or_else(|| LoaderError::InvalidDate {
        record: record_no,
        raw: date_raw.to_string(),
    })?;
    let value = parse_value(value_raw).ok_or_else(|| LoaderError::InvalidValue {
        record: record_no,
        raw: value_raw.to_string(),
    })?;

    Ok(PricePoint::new(id, date, value, currency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_rows_with_decimal_commas() {
        let data = "1,2023-01-02,\"101,25\",PLN\n2, 2023-01-03 ,100.5, PLN\n";
        let points = CsvLoader::new("unused").parse_reader(data.as_bytes()).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].id, 1);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        assert_eq!(points[0].value, 101.25);
        assert_eq!(points[1].value, 100.5);
        assert_eq!(points[1].currency, "PLN");
    }

    #[test]
    fn skips_blank_lines_and_header_when_configured() {
        let data = "id;date;value;currency\n\n1;2023-01-02;5,5;EUR\n\n";
        let points = CsvLoader::new("unused")
            .with_delimiter(b';')
            .with_headers(true)
            .parse_reader(data.as_bytes())
            .unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].value, 5.5);
        assert_eq!(points[0].currency, "EUR");
    }

    #[test]
    fn reports_bad_fields_with_record_number() {
        let data = "1,2023-01-02,5,PLN\n2,2023-13-40,5,PLN\n";
        let err = CsvLoader::new("unused").parse_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidDate { record: 2, .. }));

        let data = "1,2023-01-02,five,PLN\n";
        let err = CsvLoader::new("unused").parse_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidValue { record: 1, .. }));

        let data = "x,2023-01-02,5,PLN\n";
        let err = CsvLoader::new("unused").parse_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidId { record: 1, .. }));

        let data = "1,2023-01-02,5\n";
        let err = CsvLoader::new("unused").parse_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::MissingField {
                record: 1,
                field: "currency"
            }
        ));
    }

    #[test]
    fn rows_with_extra_columns_are_rejected() {
        let data = "1,2023-01-02,5,PLN\n2,2023-01-03,5,PLN,junk,more\n";
        let err = CsvLoader::new("unused").parse_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::ExtraFields {
                record: 2,
                expected: 4,
                found: 6
            }
        ));

        // a lone over-wide row is caught too, not only a width change
        let data = "1,2023-01-02,5,PLN,junk\n";
        let err = CsvLoader::new("unused").parse_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoaderError::ExtraFields { record: 1, .. }));
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1,2023-01-02,10,PLN").unwrap();
        writeln!(file, "2,2023-01-03,9,PLN").unwrap();

        let points = CsvLoader::new(file.path()).load().unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvLoader::new(dir.path().join("nope.csv")).load().unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}
