// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mailbox attack patterns: fixed knight and king offsets, pawn capture steps, and ray walks.

use crate::core::*;

/// The eight `(row, col)` jumps of a knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Squares a knight on `sq` could jump to, ignoring occupancy.
pub fn knight_targets(sq: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |&(row, col)| sq.offset(row, col))
}

/// Squares adjacent to `sq`, paired with the direction of the step.
pub fn king_targets(sq: Square) -> impl Iterator<Item = (Direction, Square)> {
    ALL_DIRECTIONS
        .iter()
        .filter_map(move |&dir| sq.towards(dir).map(|target| (dir, target)))
}

/// The two directions a pawn of the given color captures in.
pub const fn pawn_capture_directions(color: Color) -> [Direction; 2] {
    match color {
        Color::White => [Direction::NorthWest, Direction::NorthEast],
        Color::Black => [Direction::SouthWest, Direction::SouthEast],
    }
}

/// An iterator over the squares of a ray, starting one step away from its origin and ending at the edge of the
/// board. The ray does not look at occupancy; callers stop walking at the first blocker.
#[derive(Clone, Debug)]
pub struct Ray {
    next: Option<Square>,
    dir: Direction,
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next?;
        self.next = current.towards(self.dir);
        Some(current)
    }
}

pub fn ray(origin: Square, dir: Direction) -> Ray {
    Ray {
        next: origin.towards(dir),
        dir,
    }
}
