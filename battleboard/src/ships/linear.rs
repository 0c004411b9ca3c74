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
use std::convert::TryFrom;

use crate::{board::Coordinate, ships::Orientation};

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }

    /// Construct a linear ship with the specified length. Returns `None` if len is 0.
    pub fn try_new(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Line(len))
        }
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Get the last cell of this ship when its first cell is at `start`. Returns `None` if
    /// that cell is not representable as a [`Coordinate`].
    pub fn end(&self, start: Coordinate, orientation: Orientation) -> Option<Coordinate> {
        let last = i32::try_from(self.0 - 1).ok()?;
        let (dr, dc) = orientation.step();
        Some(Coordinate::new(
            start.row.checked_add(dr * last)?,
            start.col.checked_add(dc * last)?,
        ))
    }

    /// Get the cells this ship covers when its first cell is at `start` and it extends
    /// along `orientation`, in order from `start`. Does not account for bounds or
    /// occupancy. Returns `None` if the far end is not representable as a
    /// [`Coordinate`].
    pub fn project(&self, start: Coordinate, orientation: Orientation) -> Option<Vec<Coordinate>> {
        self.end(start, orientation)?;
        let last = i32::try_from(self.0 - 1).ok()?;
        let (dr, dc) = orientation.step();
        Some(
            (0..=last)
                .map(|i| Coordinate::new(start.row + dr * i, start.col + dc * i))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_projection_walks_columns() {
        let cells = Line::new(3)
            .project(Coordinate::new(0, 2), Orientation::Horizontal)
            .unwrap();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(0, 2),
                Coordinate::new(0, 3),
                Coordinate::new(0, 4)
            ]
        );
    }

    #[test]
    fn vertical_projection_walks_rows() {
        let cells = Line::new(2)
            .project(Coordinate::new(5, 2), Orientation::Vertical)
            .unwrap();
        assert_eq!(cells, vec![Coordinate::new(5, 2), Coordinate::new(6, 2)]);
    }

    #[test]
    fn single_cell_ship() {
        let cells = Line::new(1)
            .project(Coordinate::new(4, 4), Orientation::Vertical)
            .unwrap();
        assert_eq!(cells, vec![Coordinate::new(4, 4)]);
    }

    #[test]
    fn overflowing_projection_is_none() {
        let line = Line::new(3);
        assert_eq!(
            line.project(Coordinate::new(0, i32::MAX - 1), Orientation::Horizontal),
            None
        );
        assert!(Line::new(usize::MAX)
            .project(Coordinate::new(0, 0), Orientation::Vertical)
            .is_none());
    }

    #[test]
    fn end_is_last_projected_cell() {
        let line = Line::new(4);
        let start = Coordinate::new(2, 3);
        for &o in Orientation::ALL {
            let cells = line.project(start, o).unwrap();
            assert_eq!(line.end(start, o), cells.last().copied());
        }
    }

    #[test]
    fn zero_length_rejected() {
        assert_eq!(Line::try_new(0), None);
        assert_eq!(Line::try_new(4).map(|l| l.len()), Some(4));
    }

    #[test]
    #[should_panic]
    fn new_panics_on_zero() {
        Line::new(0);
    }
}
