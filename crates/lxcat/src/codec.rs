//! Delimiter bounded numeric tables
//!
//! Tabulated data in every LXCat file sits between two lines of dashes, with
//! one whitespace separated row of floats per line:
//!
//! ```text
//! -----------------------------
//!  0.000000e+0	1.100000e-20
//!  1.500000e-3	1.420000e-20
//! -----------------------------
//! ```
//!
//! Rows are decoded into fixed width arrays so that a short or long row is
//! rejected rather than silently padded. Blank lines inside a block count as
//! zero-width rows.

// crate modules
use crate::cursor::LineCursor;
use crate::error::{Error, Result};
use crate::parsers::{is_delimiter, vector_of_f64};

// lxtools modules
use lxtools_format::{f, NumFormat};

// external crates
use log::trace;

/// Delimiter line written around every table
pub(crate) const DELIMITER: &str = "-----------------------------";

/// Decode the next delimited block into rows of `N` values
///
/// Skips lines up to the start marker and consumes everything up to and
/// including the end marker.
pub(crate) fn decode<const N: usize>(cursor: &mut LineCursor) -> Result<Vec<[f64; N]>> {
    let start = find_start(cursor)?;

    let mut rows = Vec::new();
    loop {
        let Some(line) = cursor.next_line() else {
            return Err(missing_end_marker(start, cursor));
        };
        if is_delimiter(line) {
            break;
        }
        rows.push(decode_row(line, cursor.line_number())?);
    }

    trace!("Decoded {} rows from line {start}", rows.len());
    Ok(rows)
}

/// Consume the next delimited block without decoding the rows
///
/// Returns the number of lines between the markers.
pub(crate) fn skip(cursor: &mut LineCursor) -> Result<usize> {
    let start = find_start(cursor)?;

    let mut count = 0;
    loop {
        let Some(line) = cursor.next_line() else {
            return Err(missing_end_marker(start, cursor));
        };
        if is_delimiter(line) {
            return Ok(count);
        }
        count += 1;
    }
}

/// Encode rows as a delimited block, values formatted like `%.6e`
///
/// The block ends with a blank line after the end marker.
pub(crate) fn encode<const N: usize>(rows: &[[f64; N]]) -> String {
    let mut s = f!("{DELIMITER}\n");
    for row in rows {
        let line = row
            .iter()
            .map(|value| value.sci(6, 2))
            .collect::<Vec<String>>()
            .join("\t");
        s += &line;
        s.push('\n');
    }
    s += &f!("{DELIMITER}\n\n");
    s
}

/// Advance past the start marker, returning its line number
fn find_start(cursor: &mut LineCursor) -> Result<usize> {
    while let Some(line) = cursor.next_line() {
        if is_delimiter(line) {
            return Ok(cursor.line_number());
        }
    }
    Err(Error::MalformedTable {
        line: cursor.line_number(),
        content: String::new(),
        reason: "start marker missing".to_string(),
    })
}

fn missing_end_marker(start: usize, cursor: &LineCursor) -> Error {
    Error::MalformedTable {
        line: cursor.line_number(),
        content: String::new(),
        reason: f!("end marker missing for table starting at line {start}"),
    }
}

/// Parse one line into exactly `N` floats
fn decode_row<const N: usize>(line: &str, number: usize) -> Result<[f64; N]> {
    let values = if line.trim().is_empty() {
        Vec::new()
    } else {
        match vector_of_f64(line) {
            Ok((rest, values)) if rest.trim().is_empty() => values,
            _ => {
                return Err(Error::InvalidNumber {
                    line: number,
                    content: line.to_string(),
                })
            }
        }
    };

    <[f64; N]>::try_from(values).map_err(|values| Error::MalformedTable {
        line: number,
        content: line.to_string(),
        reason: f!("expected {N} columns, found {}", values.len()),
    })
}
