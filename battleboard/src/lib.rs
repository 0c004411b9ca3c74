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
//! Board-state engine for a single player's game of Battleship.
//!
//! A [`BoardTracker`] keeps a sparse map from [`Coordinate`]s to [`CellStatus`]. Ships
//! are placed by label (`"A3"`), size and [`Orientation`], attacks are resolved against
//! the map, and the game is over once no placed ship segment is left unhit.
//!
//! ```
//! use battleboard::{AttackResult, BoardTracker, Orientation};
//!
//! let mut board = BoardTracker::new(10);
//! board.place(2, "A1", Orientation::Horizontal).unwrap();
//! assert_eq!(board.attack("A1").unwrap(), AttackResult::Hit);
//! assert_eq!(board.attack("B1").unwrap(), AttackResult::Miss);
//! assert!(!board.is_game_over());
//! assert_eq!(board.attack("a2").unwrap(), AttackResult::Hit);
//! assert!(board.is_game_over());
//! ```
//!
//! Failures are returned as typed errors. The crate logs through the [`log`] facade and
//! never prints.

pub use self::{
    board::{
        AttackResult, BoardTracker, CannotPlaceReason, CellStatus, Coordinate,
        InvalidPositionError, ParseOrientationError, PlaceError, DEFAULT_SIZE,
    },
    ships::{Line, Orientation},
};

pub mod board;
pub mod ships;
