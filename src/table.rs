// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Cells of a tabular connection row, as read from a spreadsheet.

use crate::Error;

/// A single cell of a tabular connection row.
///
/// Spreadsheet readers hand out a mix of text and numbers, so both are
/// accepted wherever a number is expected.
#[derive(Clone, Debug, PartialEq)]
pub enum TableCell {
    Text(String),
    Number(f64),
}

impl TableCell {
    /// Returns the numeric value of the cell.
    ///
    /// Text cells are parsed after trimming surrounding whitespace; anything
    /// that isn't a finite number is a `Parse` error.
    pub fn as_f64(&self) -> Result<f64, Error> {
        let value = match self {
            TableCell::Number(value) => *value,
            TableCell::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::parse(format!("Not a number: {text:?}")))?,
        };
        if !value.is_finite() {
            return Err(Error::parse(format!("Not a finite number: {value}")));
        }
        Ok(value)
    }

    /// Splits a signed connection reference into its direction and index.
    ///
    /// Positive values are outputs.  Anything else, including `0`, is an
    /// input, and the absolute value is used as the index.
    pub(crate) fn as_signed_index(&self) -> Result<(bool, u64), Error> {
        let value = self.as_f64()?;
        let is_input = value <= 0.0;
        let index = value.abs();
        if index.fract() != 0.0 || index >= u64::MAX as f64 {
            return Err(Error::parse(format!(
                "Not a valid connection index: {value}"
            )));
        }
        Ok((is_input, index as u64))
    }
}

impl From<&str> for TableCell {
    fn from(value: &str) -> Self {
        TableCell::Text(value.to_string())
    }
}

impl From<String> for TableCell {
    fn from(value: String) -> Self {
        TableCell::Text(value)
    }
}

impl From<f64> for TableCell {
    fn from(value: f64) -> Self {
        TableCell::Number(value)
    }
}

impl From<i32> for TableCell {
    fn from(value: i32) -> Self {
        TableCell::Number(value.into())
    }
}
