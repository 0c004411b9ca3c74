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
#![cfg(feature = "rng_gen")]

use battleboard::{BoardTracker, CannotPlaceReason, CellStatus};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn random_fleet_has_no_overlap() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut board = BoardTracker::new(10);
    let fleet = [5, 4, 3, 3, 2];
    for &len in fleet.iter() {
        let (start, orientation) = board.place_random(&mut rng, len).unwrap();
        assert!(board.contains(&start), "{} {}", start, orientation);
    }
    assert_eq!(board.remaining(), fleet.iter().sum::<usize>());
    assert!(board
        .snapshot()
        .values()
        .all(|&status| status == CellStatus::Occupied));
}

#[test]
fn random_placement_gives_up_when_full() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = BoardTracker::new(2);
    board.place_random(&mut rng, 2).unwrap();
    board.place_random(&mut rng, 2).unwrap();
    let err = board.place_random(&mut rng, 1).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::Overlap);
    assert_eq!(board.remaining(), 4);
}

#[test]
fn random_placement_rejects_oversized_ship() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut board = BoardTracker::new(3);
    let err = board.place_random(&mut rng, 4).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    let err = board.place_random(&mut rng, 0).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::InvalidInput);
    assert!(board.snapshot().is_empty());
}
