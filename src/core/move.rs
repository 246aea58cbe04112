// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("move must be two squares, e.g. e2e4: {0:?}")]
    InvalidLength(String),
    #[error("invalid square in move: {0}")]
    InvalidSquare(#[from] SquareParseError),
}

/// A single ply, as recognized by ply.
///
/// A move remembers the piece that moved and the piece it captured, if any. Both are copied off of the board when
/// the move is constructed, so undoing a move can restore the board exactly no matter what happened to the board
/// in between.
///
/// Two moves compare equal when they share a source and a destination square. The pieces are bookkeeping for
/// undo and do not participate in equality or hashing.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Move {
    source: Square,
    destination: Square,
    moved: Piece,
    captured: Option<Piece>,
}

impl Move {
    /// Constructs a move of the piece on `source` to `destination`, snapshotting both squares of `board`.
    ///
    /// Returns `None` if there is no piece on `source`.
    pub fn on(board: &Board, source: Square, destination: Square) -> Option<Move> {
        let moved = board.piece_at(source)?;
        Some(Move {
            source,
            destination,
            moved,
            captured: board.piece_at(destination),
        })
    }

    /// Constructs a move from its parts. Callers are responsible for `moved` and `captured` agreeing with the board
    /// the move will be applied to.
    pub const fn new(
        source: Square,
        destination: Square,
        moved: Piece,
        captured: Option<Piece>,
    ) -> Move {
        Move {
            source,
            destination,
            moved,
            captured,
        }
    }

    /// Returns the source square of this move.
    pub fn source(self) -> Square {
        self.source
    }

    /// Returns the destination square of this move.
    pub fn destination(self) -> Square {
        self.destination
    }

    /// Returns the piece that moved.
    pub fn moved(self) -> Piece {
        self.moved
    }

    /// Returns the piece captured by this move, if any.
    pub fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Returns whether or not this move is a capture move.
    pub fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    pub fn is_king_move(self) -> bool {
        self.moved.kind == PieceKind::King
    }

    /// Returns the coordinate notation of this move, e.g. `e2e4`.
    pub fn as_uci(self) -> String {
        format!("{}{}", self.source, self.destination)
    }

    /// Splits coordinate notation such as `e2e4` into its source and destination squares.
    pub fn parse_squares(text: &str) -> Result<(Square, Square), MoveParseError> {
        let text = text.trim();
        if text.len() != 4 || !text.is_ascii() {
            return Err(MoveParseError::InvalidLength(text.to_owned()));
        }

        let (source, destination) = text.split_at(2);
        Ok((source.parse()?, destination.parse()?))
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.source == other.source && self.destination == other.destination
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.destination)
    }
}
