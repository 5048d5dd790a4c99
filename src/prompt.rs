// Interactive date prompt
use crate::model::InputError;
use std::io::{BufRead, Write};

pub const START_PROMPT: &str = "Podaj datę początkową (YYYY-MM-DD): ";
pub const END_PROMPT: &str = "Podaj datę końcową (YYYY-MM-DD): ";

/// Writes `question` and reads one trimmed line of answer.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, InputError> {
    output.write_all(question.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Asks for the start and end date strings, in that order.
pub fn ask_date_bounds<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<(String, String), InputError> {
    let start = ask(input, output, START_PROMPT)?;
    let end = ask(input, output, END_PROMPT)?;
    Ok((start, end))
}
