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
//! Errors used by the `BoardTracker`.

use std::fmt::{self, Debug};

use thiserror::Error;

/// Error returned when a label does not have the form of a letter followed by one or two
/// digits.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid position format: {label:?}")]
pub struct InvalidPositionError {
    /// The label that failed to parse.
    label: String,
}

impl InvalidPositionError {
    /// Create an [`InvalidPositionError`] for the given label.
    pub(crate) fn new(label: &str) -> Self {
        Self {
            label: label.to_owned(),
        }
    }

    /// The label that failed to parse.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Error returned when an orientation name is not recognized.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unrecognized orientation {0:?}, expected \"horizontal\" or \"vertical\"")]
pub struct ParseOrientationError(pub(crate) String);

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The starting label was not a valid position.
    #[error("invalid position format")]
    InvalidPosition,
    /// The ship size was zero or the orientation was not recognized.
    #[error("invalid input")]
    InvalidInput,
    /// At least one cell of the ship would fall outside the board.
    #[error("position is out of bounds")]
    OutOfBounds,
    /// At least one cell of the ship is already occupied by another ship.
    #[error("space is already occupied")]
    Overlap,
}

/// Error caused when attempting to place a ship. The board is left unchanged.
#[derive(Error)]
#[error("could not place ship of size {ship_size} at {position}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship_size: usize,
    position: String,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason, the ship size and the requested start.
    pub(crate) fn new(reason: CannotPlaceReason, ship_size: usize, position: &str) -> Self {
        Self {
            reason,
            ship_size,
            position: position.to_owned(),
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Size of the ship that was being placed.
    pub fn ship_size(&self) -> usize {
        self.ship_size
    }

    /// The requested starting position, as given by the caller.
    pub fn position(&self) -> &str {
        &self.position
    }
}

impl From<PlaceError> for CannotPlaceReason {
    fn from(err: PlaceError) -> Self {
        err.reason
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn place_error_reports_reason_as_source() {
        let err = PlaceError::new(CannotPlaceReason::Overlap, 3, "A5");
        assert_eq!(err.reason(), CannotPlaceReason::Overlap);
        assert_eq!(err.ship_size(), 3);
        assert_eq!(err.position(), "A5");
        assert_eq!(
            err.to_string(),
            "could not place ship of size 3 at A5: space is already occupied"
        );
        assert_eq!(
            err.source().map(|e| e.to_string()).as_deref(),
            Some("space is already occupied")
        );
    }

    #[test]
    fn invalid_position_message() {
        let err = InvalidPositionError::new("A#1");
        assert_eq!(err.to_string(), "invalid position format: \"A#1\"");
    }
}
