// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::core::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 mailbox board. Each square holds a piece or nothing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard starting arrangement.
    pub fn start_position() -> Board {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            for (color, back_row) in [(Color::Black, 0), (Color::White, 7)] {
                if let Some(sq) = Square::new(back_row, col) {
                    board[sq] = Some(Piece::new(color, kind));
                }
                if let Some(sq) = Square::new(color.pawn_start_row(), col) {
                    board[sq] = Some(Piece::new(color, PieceKind::Pawn));
                }
            }
        }

        board
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.as_usize()]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.as_usize()].is_none()
    }

    /// Places `piece` on `sq`, returning whatever was there before.
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.as_usize()].replace(piece)
    }

    /// Empties `sq`, returning whatever was there before.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.as_usize()].take()
    }

    /// Iterates the occupied squares of the board in row order, from a8 to h1.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        squares().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterates the squares occupied by pieces of `color`, in row order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Finds the king of the given color by scanning the board.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Option<Piece> {
        &self.squares[sq.as_usize()]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.squares[sq.as_usize()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square::new(row, col).ok_or(fmt::Error)?;
                if let Some(piece) = self.piece_at(sq) {
                    write!(f, " {} ", piece)?;
                } else {
                    write!(f, " . ")?;
                }
            }

            writeln!(f, "| {}", 8 - row)?;
        }

        for _ in 0..8 {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for col in 0..8u8 {
            write!(f, " {} ", (b'a' + col) as char)?;
        }

        writeln!(f)?;
        Ok(())
    }
}
