// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Coordinates of cells on the board and parsing of human-readable labels.
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::InvalidPositionError;

/// Matcher for position labels: one letter followed by one or two digits.
static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][0-9]{1,2}$").unwrap());

/// Zero-based `(row, col)` position of a cell.
///
/// Coordinates are signed because the label `"A0"` names column `-1`. Labels are only
/// checked for format when parsed, bounds are checked against a particular board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Row of the cell, taken from the letter of the label.
    pub row: i32,
    /// Column of the cell, taken from the number of the label minus one.
    pub col: i32,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Parse a label such as `"A1"` or `"j10"`. The letter is the row (`A` is 0) and the
    /// number minus one is the column.
    pub fn parse_label(label: &str) -> Result<Self, InvalidPositionError> {
        if !LABEL.is_match(label) {
            return Err(InvalidPositionError::new(label));
        }
        let mut chars = label.chars();
        // The regex guarantees an ASCII letter followed by ASCII digits.
        let letter = chars.next().unwrap().to_ascii_uppercase();
        let row = letter as i32 - 'A' as i32;
        let col = chars
            .as_str()
            .parse::<i32>()
            .map_err(|_| InvalidPositionError::new(label))?
            - 1;
        Ok(Self { row, col })
    }

    /// Whether this coordinate can be written back as a label that parses to it.
    fn has_label(&self) -> bool {
        (0..26).contains(&self.row) && (0..99).contains(&self.col)
    }
}

impl FromStr for Coordinate {
    type Err = InvalidPositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s)
    }
}

impl fmt::Display for Coordinate {
    /// Writes the label form (`A3`) when there is one, otherwise `(row, col)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.has_label() {
            let letter = (b'A' + self.row as u8) as char;
            write!(f, "{}{}", letter, self.col + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (i32, i32) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}
