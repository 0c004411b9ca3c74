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
//! The board tracker: ship placement, attacks and game-over detection.

use std::{collections::BTreeMap, convert::TryFrom};

use log::{debug, info, trace};

use crate::ships::{Line, Orientation};

pub use self::{
    coordinate::Coordinate,
    errors::{CannotPlaceReason, InvalidPositionError, ParseOrientationError, PlaceError},
};

mod coordinate;
mod errors;

/// Side length of the classic board.
pub const DEFAULT_SIZE: usize = 10;

/// State of a tracked cell. Cells that were never touched have no status.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellStatus {
    /// The cell holds a ship segment that has not been hit.
    Occupied,
    /// The cell held a ship segment and was attacked.
    Hit,
    /// The cell was attacked and held no ship segment.
    Miss,
}

/// Result of an attack on a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AttackResult {
    /// The attack struck an occupied cell.
    Hit,
    /// The attack struck anything else.
    Miss,
}

/// Sparse record of a single player's square board.
///
/// Only cells that were placed on or attacked are stored. Placement is all or nothing:
/// every check runs before the first cell is written.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardTracker {
    /// Side length of the board.
    size: usize,

    /// Status of every touched cell, ordered row-major.
    cells: BTreeMap<Coordinate, CellStatus>,
}

impl BoardTracker {
    /// Create an empty board with the given side length. Panics if `size` is 0.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(board) => board,
            None => panic!("BoardTracker size must be nonzero"),
        }
    }

    /// Create an empty board with the given side length. Returns `None` if `size` is 0.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 {
            None
        } else {
            Some(Self {
                size,
                cells: BTreeMap::new(),
            })
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the given [`Coordinate`] lies on this board.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        let in_range = |v: i32| usize::try_from(v).map_or(false, |v| v < self.size);
        in_range(coord.row) && in_range(coord.col)
    }

    /// Place a ship of `ship_size` cells starting at the labelled cell and extending along
    /// `orientation`. On error the board is unchanged.
    pub fn place(
        &mut self,
        ship_size: usize,
        label: &str,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        let start = Self::parse_start(ship_size, label)?;
        self.place_inner(ship_size, start, orientation, label)
            .map(|_| ())
    }

    /// Like [`place`][BoardTracker::place], but takes the orientation by name. An
    /// unrecognized name is reported as [`CannotPlaceReason::InvalidInput`], after the
    /// label has been checked.
    pub fn place_str(
        &mut self,
        ship_size: usize,
        label: &str,
        orientation: &str,
    ) -> Result<(), PlaceError> {
        let start = Self::parse_start(ship_size, label)?;
        let orientation = orientation
            .parse::<Orientation>()
            .map_err(|err: ParseOrientationError| {
                debug!("rejected placement at {}: {}", label, err);
                PlaceError::new(CannotPlaceReason::InvalidInput, ship_size, label)
            })?;
        self.place_inner(ship_size, start, orientation, label)
            .map(|_| ())
    }

    /// Place a ship starting at an already parsed [`Coordinate`]. Returns the cells that
    /// are now occupied by the ship.
    pub fn place_at(
        &mut self,
        ship_size: usize,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<Vec<Coordinate>, PlaceError> {
        self.place_inner(ship_size, start, orientation, &start.to_string())
    }

    /// Parse the starting label of a placement.
    fn parse_start(ship_size: usize, label: &str) -> Result<Coordinate, PlaceError> {
        label.parse::<Coordinate>().map_err(|err: InvalidPositionError| {
            debug!("rejected placement: {}", err);
            PlaceError::new(CannotPlaceReason::InvalidPosition, ship_size, label)
        })
    }

    /// Validate and write a placement. `position` is only used for error reporting.
    fn place_inner(
        &mut self,
        ship_size: usize,
        start: Coordinate,
        orientation: Orientation,
        position: &str,
    ) -> Result<Vec<Coordinate>, PlaceError> {
        let result = self.check_placement(ship_size, start, orientation);
        match result {
            Ok(cells) => {
                for coord in cells.iter() {
                    self.cells.insert(*coord, CellStatus::Occupied);
                }
                debug!(
                    "placed ship of size {} at {} {}",
                    ship_size, position, orientation
                );
                Ok(cells)
            }
            Err(reason) => {
                debug!(
                    "rejected ship of size {} at {} {}: {}",
                    ship_size, position, orientation, reason
                );
                Err(PlaceError::new(reason, ship_size, position))
            }
        }
    }

    /// Compute the cells of a placement, checking the ship size, bounds and overlap
    /// without modifying the board.
    fn check_placement(
        &self,
        ship_size: usize,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<Vec<Coordinate>, CannotPlaceReason> {
        let line = Line::try_new(ship_size).ok_or(CannotPlaceReason::InvalidInput)?;
        // Both ends on the board means the whole line is, so check before allocating.
        match line.end(start, orientation) {
            Some(end) if self.contains(&start) && self.contains(&end) => {}
            _ => return Err(CannotPlaceReason::OutOfBounds),
        }
        let cells = line
            .project(start, orientation)
            .ok_or(CannotPlaceReason::OutOfBounds)?;
        // Only live ship segments block a placement, attacked cells do not.
        if cells
            .iter()
            .any(|coord| self.status(coord) == Some(CellStatus::Occupied))
        {
            return Err(CannotPlaceReason::Overlap);
        }
        Ok(cells)
    }

    /// Attack the labelled cell. The label is not checked against the board size, a
    /// well-formed label off the board is recorded as a miss.
    pub fn attack(&mut self, label: &str) -> Result<AttackResult, InvalidPositionError> {
        let coord: Coordinate = label.parse()?;
        Ok(self.attack_at(coord))
    }

    /// Attack the given cell. An occupied cell becomes [`CellStatus::Hit`], any other cell
    /// becomes [`CellStatus::Miss`], including one that was already hit.
    pub fn attack_at(&mut self, coord: Coordinate) -> AttackResult {
        let cell = self.cells.entry(coord).or_insert(CellStatus::Miss);
        let result = match *cell {
            CellStatus::Occupied => {
                *cell = CellStatus::Hit;
                AttackResult::Hit
            }
            _ => {
                *cell = CellStatus::Miss;
                AttackResult::Miss
            }
        };
        trace!("attack at {}: {:?}", coord, result);
        if result == AttackResult::Hit && self.is_game_over() {
            info!("attack at {} hit the last ship segment", coord);
        }
        result
    }

    /// Returns true if at least one cell is tracked and none of them is still occupied.
    /// An empty board is never over.
    pub fn is_game_over(&self) -> bool {
        !self.cells.is_empty() && self.remaining() == 0
    }

    /// Number of ship segments that have not been hit.
    pub fn remaining(&self) -> usize {
        self.cells
            .values()
            .filter(|&&status| status == CellStatus::Occupied)
            .count()
    }

    /// Get the status of the given cell, or `None` if it was never touched.
    pub fn status(&self, coord: &Coordinate) -> Option<CellStatus> {
        self.cells.get(coord).copied()
    }

    /// Read-only view of every tracked cell, ordered row-major.
    pub fn snapshot(&self) -> &BTreeMap<Coordinate, CellStatus> {
        &self.cells
    }

    /// Place a ship of `ship_size` cells at a random start and orientation that fits.
    /// Gives up after a fixed number of attempts and reports the last failure.
    #[cfg(feature = "rng_gen")]
    pub fn place_random<R: rand::Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship_size: usize,
    ) -> Result<(Coordinate, Orientation), PlaceError> {
        const ATTEMPTS: usize = 100;

        let bound = i32::try_from(self.size).unwrap_or(i32::MAX);
        let mut last = CannotPlaceReason::InvalidInput;
        for _ in 0..ATTEMPTS {
            let start = Coordinate::new(rng.gen_range(0, bound), rng.gen_range(0, bound));
            let orientation = rng.gen();
            match self.check_placement(ship_size, start, orientation) {
                Ok(_) => {
                    self.place_at(ship_size, start, orientation)?;
                    return Ok((start, orientation));
                }
                Err(CannotPlaceReason::InvalidInput) => break,
                Err(reason) => last = reason,
            }
        }
        debug!(
            "no random placement found for ship of size {}: {}",
            ship_size, last
        );
        Err(PlaceError::new(last, ship_size, "random"))
    }
}

impl Default for BoardTracker {
    /// Construct an empty classic 10x10 board.
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}
