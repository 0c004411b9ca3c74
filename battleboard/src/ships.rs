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
//! Types used for defining ships and their placement.
use std::{fmt, str::FromStr};

use crate::board::ParseOrientationError;

pub use self::linear::Line;

mod linear;

/// Axis along which a ship extends from its starting cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship extends towards higher columns.
    Horizontal,
    /// The ship extends towards higher rows.
    Vertical,
}

impl Orientation {
    /// Both orientations.
    pub const ALL: &'static [Orientation] = &[Orientation::Horizontal, Orientation::Vertical];

    /// Per-cell `(row, col)` step along this orientation.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    /// Lower case name of the orientation.
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Parses `horizontal` or `vertical`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .iter()
            .copied()
            .find(|o| o.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOrientationError(s.to_owned()))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(feature = "rng_gen")]
mod rng_gen {
    use rand::{
        distributions::{Distribution, Standard},
        Rng,
    };

    use super::Orientation;

    impl Distribution<Orientation> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
            if rng.gen() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case() {
        assert_eq!("horizontal".parse(), Ok(Orientation::Horizontal));
        assert_eq!("Vertical".parse(), Ok(Orientation::Vertical));
        assert_eq!("HORIZONTAL".parse(), Ok(Orientation::Horizontal));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "invalid_orientation".parse::<Orientation>().unwrap_err();
        assert_eq!(err, ParseOrientationError("invalid_orientation".to_owned()));
        assert!("h".parse::<Orientation>().is_err());
        assert!("".parse::<Orientation>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for &o in Orientation::ALL {
            assert_eq!(o.to_string().parse(), Ok(o));
        }
    }
}
