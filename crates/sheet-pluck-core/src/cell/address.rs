//! Cell address and range types

use crate::error::{Error, Result};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A cell address (e.g., "H12")
///
/// The column is kept as its letter form, canonicalized to uppercase.
/// Rows are 1-based, exactly as they appear in worksheet markup, so a
/// `CellAddress` formats to the same string the worksheet uses in its
/// `r` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CellAddress {
    column: String,
    row: u32,
}

impl CellAddress {
    /// Create a new cell address
    ///
    /// Fails if `column` is empty or contains anything but ASCII letters,
    /// or if `row` is 0.
    pub fn new(column: &str, row: u32) -> Result<Self> {
        if column.is_empty() || !column.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::InvalidAddress(format!(
                "invalid column letters '{}'",
                column
            )));
        }
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}{}'",
                column, row
            )));
        }

        Ok(Self {
            column: column.to_ascii_uppercase(),
            row,
        })
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use sheet_pluck_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("h12").unwrap();
    /// assert_eq!(addr.column(), "H");
    /// assert_eq!(addr.row(), 12);
    /// assert_eq!(addr.to_string(), "H12");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let (column, row) = split_a1(s)
            .ok_or_else(|| Error::InvalidAddress(format!("expected <LETTERS><ROW>, got '{}'", s)))?;
        Self::new(column, row)
    }

    /// Column letters (uppercase)
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Row number (1-based)
    pub fn row(&self) -> u32 {
        self.row
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CellAddress {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<CellAddress> for String {
    fn from(addr: CellAddress) -> Self {
        addr.to_string()
    }
}

/// Split `<LETTERS><DIGITS>` into its column and a row >= 1.
fn split_a1(s: &str) -> Option<(&str, u32)> {
    let split = s
        .bytes()
        .position(|b| !b.is_ascii_alphabetic())
        .unwrap_or(s.len());
    let (letters, digits) = s.split_at(split);

    if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match digits.parse::<u32>() {
        Ok(row) if row >= 1 => Some((letters, row)),
        _ => None,
    }
}

/// A single-column span of rows (e.g., "H12-H300")
///
/// Rows are inclusive on both ends. A range whose start is after its end is
/// kept as given and simply covers no rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CellRange {
    column: String,
    start: u32,
    end: u32,
}

impl CellRange {
    /// Parse a range expression
    ///
    /// Two forms are accepted:
    /// - `<COL><ROW1>-<COL><ROW2>`, where both column tokens are the same
    ///   letters (compared case-insensitively)
    /// - `<COL><ROW>`, a single cell
    ///
    /// The column is uppercased on output.
    ///
    /// # Examples
    /// ```
    /// use sheet_pluck_core::CellRange;
    ///
    /// let range = CellRange::parse("H12-H300").unwrap();
    /// assert_eq!((range.column(), range.start(), range.end()), ("H", 12, 300));
    ///
    /// let single = CellRange::parse("h2").unwrap();
    /// assert_eq!((single.column(), single.start(), single.end()), ("H", 2, 2));
    ///
    /// assert!(CellRange::parse("H12-I13").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        let s = expression.trim();
        let invalid = || Error::InvalidRangeExpression(expression.to_string());

        match s.split_once('-') {
            Some((from, to)) => {
                let (col_from, start) = split_a1(from.trim()).ok_or_else(invalid)?;
                let (col_to, end) = split_a1(to.trim()).ok_or_else(invalid)?;

                if !col_from.eq_ignore_ascii_case(col_to) {
                    return Err(invalid());
                }

                Ok(Self {
                    column: col_from.to_ascii_uppercase(),
                    start,
                    end,
                })
            }
            None => {
                let (column, row) = split_a1(s).ok_or_else(invalid)?;
                Ok(Self {
                    column: column.to_ascii_uppercase(),
                    start: row,
                    end: row,
                })
            }
        }
    }

    /// Column letters (uppercase)
    pub fn column(&self) -> &str {
        &self.column
    }

    /// First row (1-based)
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last row (1-based, inclusive)
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Rows covered, ascending
    pub fn rows(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    /// Addresses of every cell in the range, ascending by row
    pub fn addresses(&self) -> impl Iterator<Item = CellAddress> + '_ {
        self.rows().map(move |row| CellAddress {
            column: self.column.clone(),
            row,
        })
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}{}", self.column, self.start)
        } else {
            write!(
                f,
                "{}{}-{}{}",
                self.column, self.start, self.column, self.end
            )
        }
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CellRange {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<CellRange> for String {
    fn from(range: CellRange) -> Self {
        range.to_string()
    }
}
