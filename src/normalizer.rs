/// Turns a decimal comma into a decimal point so `f64::from_str` accepts it.
///
/// Only the first comma is replaced; a value with two commas stays invalid.
pub fn normalize_decimal(raw: &str) -> String {
    raw.trim().replacen(',', ".", 1)
}

/// Parses a price field written with either decimal separator.
pub fn parse_value(raw: &str) -> Option<f64> {
    normalize_decimal(raw).parse::<f64>().ok()
}
