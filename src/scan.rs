// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Check and pin detection from a king's point of view.
//!
//! Rather than asking "is this square attacked?" once per candidate move, the scanner stands on the king square and
//! looks outward once: along each of the eight rays and at each of the eight knight jumps. Whatever it finds is
//! classified as either a check (an enemy piece attacking the king directly) or a pin (a friendly piece standing
//! between the king and an enemy slider). Move generation then consults this summary instead of re-deriving it.

use crate::core::*;

/// A friendly piece that may only move along `direction` (in either sense) without exposing its king.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    /// Direction from the king toward the pinned piece.
    pub direction: Direction,
}

/// An enemy piece attacking the king.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    /// Direction from the king toward the checker, or `None` for a knight check. Knight checks have no ray and
    /// can't be blocked.
    pub ray: Option<Direction>,
}

impl Check {
    /// Squares that resolve this check when a non-king piece moves to them: the checker itself, and for ray checks
    /// every square between the king and the checker.
    pub fn resolving_squares(&self, king: Square) -> Vec<Square> {
        let dir = match self.ray {
            Some(dir) => dir,
            None => return vec![self.square],
        };

        let mut squares = Vec::new();
        for sq in ray(king, dir) {
            squares.push(sq);
            if sq == self.square {
                break;
            }
        }

        squares
    }
}

/// The result of scanning outward from a king.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scan {
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl Scan {
    pub fn in_check(&self) -> bool {
        !self.checks.is_empty()
    }

    pub fn is_double_check(&self) -> bool {
        self.checks.len() > 1
    }
}

/// Scans outward from `king` for checks against, and pins on, the pieces of color `us`.
///
/// `king` need not hold a king: the king's own square is skipped over if a ray passes through it, so the scan can
/// be run from a square the king is only considering moving to.
pub fn scan(board: &Board, king: Square, us: Color) -> Scan {
    let mut result = Scan::default();
    for &dir in ALL_DIRECTIONS.iter() {
        let mut candidate = None;
        for (distance, sq) in (1..).zip(ray(king, dir)) {
            let piece = match board.piece_at(sq) {
                Some(piece) => piece,
                None => continue,
            };

            if piece.color == us {
                if piece.kind == PieceKind::King {
                    continue;
                }

                if candidate.is_none() {
                    candidate = Some(sq);
                    continue;
                }

                // Two friendly pieces in a row; neither is pinned.
                break;
            }

            if attacks_along(piece, dir, distance) {
                match candidate {
                    None => result.checks.push(Check {
                        square: sq,
                        ray: Some(dir),
                    }),
                    Some(pinned) => result.pins.push(Pin {
                        square: pinned,
                        direction: dir,
                    }),
                }
            }

            break;
        }
    }

    for sq in knight_targets(king) {
        if let Some(piece) = board.piece_at(sq) {
            if piece.color != us && piece.kind == PieceKind::Knight {
                result.checks.push(Check {
                    square: sq,
                    ray: None,
                });
            }
        }
    }

    result
}

/// Whether or not `piece`, found `distance` squares from the king along `dir`, attacks back along that ray.
fn attacks_along(piece: Piece, dir: Direction, distance: u32) -> bool {
    match piece.kind {
        PieceKind::Rook => dir.is_orthogonal(),
        PieceKind::Bishop => dir.is_diagonal(),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        PieceKind::Pawn => {
            distance == 1 && pawn_capture_directions(piece.color).contains(&dir.reverse())
        }
        PieceKind::Knight => false,
    }
}
