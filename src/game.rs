// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    convert::TryFrom,
    fmt::{self, Write},
    ops::Deref,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    core::*,
    movegen,
    scan::{self, Scan},
    tracing::constants,
};

/// A game in progress: the board, whose turn it is, and the stack of moves that led here.
///
/// The board and the king locations change only through `make_move` and `undo_move`, which always update them
/// together.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    /// Color whose turn it is to move.
    side_to_move: Color,
    /// Every move applied and not yet undone, oldest first.
    move_log: Vec<Move>,
    white_king: Square,
    black_king: Square,
}

/// Whether or not the side to move has any legal moves left.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    /// No legal moves, in check.
    Checkmate,
    /// No legal moves, not in check.
    NoLegalMoves,
}

impl GameState {
    /// The standard starting position, White to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::start_position(),
            side_to_move: Color::White,
            move_log: Vec::new(),
            white_king: E1,
            black_king: E8,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    pub fn king(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    fn set_king(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    /// Scans for checks and pins against the side to move.
    pub fn scan(&self) -> Scan {
        let us = self.side_to_move;
        scan::scan(&self.board, self.king(us), us)
    }

    /// Whether or not the king of color `us` is attacked.
    pub fn is_king_attacked(&self, us: Color) -> bool {
        scan::scan(&self.board, self.king(us), us).in_check()
    }

    /// Whether or not the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

//
// Make and unmake move.
//

impl GameState {
    /// Makes a move on the board, recording it so that it can be undone.
    ///
    /// The move is applied as recorded: the piece it snapshotted at construction time lands on the destination
    /// square. Moves should come from `valid_moves` on this position.
    ///
    /// # Panics
    ///
    /// Panics if there is no piece on the move's source square.
    pub fn make_move(&mut self, mov: Move) {
        let moving_piece = self
            .board
            .take(mov.source())
            .expect("invalid move: no piece at source square");
        debug_assert_eq!(
            moving_piece,
            mov.moved(),
            "invalid move {}: moved piece does not match the board",
            mov
        );

        self.board.put(mov.destination(), mov.moved());
        if mov.is_king_move() {
            self.set_king(mov.moved().color, mov.destination());
        }

        self.move_log.push(mov);
        self.side_to_move = self.side_to_move.toggle();
    }

    /// Undoes the most recent move, returning it. Undoing with an empty move log does nothing.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mov = self.move_log.pop()?;
        self.board.put(mov.source(), mov.moved());
        self.board[mov.destination()] = mov.captured();
        if mov.is_king_move() {
            self.set_king(mov.moved().color, mov.source());
        }

        self.side_to_move = self.side_to_move.toggle();
        Some(mov)
    }

    /// Applies `mov` for the lifetime of the returned guard. The move is undone when the guard is dropped, including
    /// during unwinding.
    pub fn trial(&mut self, mov: Move) -> Trial<'_> {
        self.make_move(mov);
        Trial { state: self }
    }
}

/// A move applied for inspection. Dereferences to the position after the move; dropping it undoes the move.
pub struct Trial<'a> {
    state: &'a mut GameState,
}

impl Deref for Trial<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.state.undo_move();
    }
}

//
// Legal move generation.
//

impl GameState {
    /// Pseudo-legal moves for the side to move. Pins are ignored and nothing is checked for leaving the king in
    /// check, except that the king never steps onto an attacked square.
    pub fn all_possible_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        movegen::generate_moves(&self.board, self.side_to_move, &mut Vec::new(), &mut moves);
        moves
    }

    /// Every legal move for the side to move.
    ///
    /// The king is scanned once for checks and pins. Out of check, every piece generates its pin-filtered moves. In
    /// single check, non-king moves must capture the checker or block its ray. In double check only the king may
    /// move. Finally each surviving move is tried on the board and kept only if the mover's king is safe after it.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let _span =
            ::tracing::debug_span!(constants::VALID_MOVES, pos = %self.as_fen()).entered();
        let us = self.side_to_move;
        let king = self.king(us);
        let Scan { mut pins, checks } = self.scan();
        let mut moves = Vec::new();
        match checks.as_slice() {
            [] => movegen::generate_moves(&self.board, us, &mut pins, &mut moves),
            [check] => {
                ::tracing::debug!(event = constants::CHECK_DETECTED, checks = 1u64);
                movegen::generate_moves(&self.board, us, &mut pins, &mut moves);
                let resolving = check.resolving_squares(king);
                moves.retain(|mov| mov.is_king_move() || resolving.contains(&mov.destination()));
            }
            _ => {
                ::tracing::debug!(
                    event = constants::CHECK_DETECTED,
                    checks = checks.len() as u64
                );
                movegen::generate_king_moves(&self.board, king, us, &mut moves);
            }
        }

        moves.retain(|&mov| {
            let exposed = self.trial(mov).is_king_attacked(us);
            if exposed {
                ::tracing::debug!(event = constants::MOVE_REJECTED, mov = %mov);
            }

            !exposed
        });

        ::tracing::debug!(
            event = constants::VALID_MOVES_COMPLETE,
            count = moves.len() as u64
        );
        moves
    }

    /// Looks up a legal move by its coordinate notation, e.g. `e2e4`.
    pub fn find_move(&mut self, text: &str) -> Result<Option<Move>, MoveParseError> {
        let (source, destination) = Move::parse_squares(text)?;
        Ok(self
            .valid_moves()
            .into_iter()
            .find(|mov| mov.source() == source && mov.destination() == destination))
    }

    pub fn status(&mut self) -> GameStatus {
        if !self.valid_moves().is_empty() {
            GameStatus::Ongoing
        } else if self.is_check() {
            GameStatus::Checkmate
        } else {
            GameStatus::NoLegalMoves
        }
    }
}

//
// FEN parsing and generation.
//
// Only the piece placement and side to move fields matter here. The castling, en-passant and clock fields are
// accepted and ignored.
//

/// Possible errors that can arise when parsing a FEN string into a `GameState`.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum FenParseError {
    #[error("unexpected char: {0}")]
    UnexpectedChar(char),
    #[error("unexpected EOF while reading")]
    UnexpectedEnd,
    #[error("invalid digit")]
    InvalidDigit,
    #[error("file does not sum to 8")]
    FileDoesNotSumToEight,
    #[error("unknown piece: {0}")]
    UnknownPiece(char),
    #[error("invalid side to move")]
    InvalidSideToMove,
    #[error("no {0} king on the board")]
    MissingKing(Color),
    #[error("more than one {0} king on the board")]
    ExtraKing(Color),
}

impl GameState {
    /// Constructs a new game state from a FEN representation of a board position.
    pub fn from_fen(fen: impl AsRef<str>) -> Result<GameState, FenParseError> {
        use std::{iter::Peekable, str::Chars};

        type Stream<'a> = Peekable<Chars<'a>>;

        fn eat(iter: &mut Stream<'_>, expected: char) -> Result<(), FenParseError> {
            match iter.next() {
                Some(c) if c == expected => Ok(()),
                Some(c) => Err(FenParseError::UnexpectedChar(c)),
                None => Err(FenParseError::UnexpectedEnd),
            }
        }

        fn peek(iter: &mut Stream<'_>) -> Result<char, FenParseError> {
            if let Some(c) = iter.peek() {
                Ok(*c)
            } else {
                Err(FenParseError::UnexpectedEnd)
            }
        }

        fn eat_side_to_move(iter: &mut Stream<'_>) -> Result<Color, FenParseError> {
            let side = match peek(iter)? {
                'w' => Color::White,
                'b' => Color::Black,
                _ => return Err(FenParseError::InvalidSideToMove),
            };

            iter.next();
            Ok(side)
        }

        let mut board = Board::empty();
        let iter = &mut fen.as_ref().trim().chars().peekable();
        for row in 0..8 {
            let mut col = 0;
            while col <= 7 {
                let c = peek(iter)?;
                if c == '/' || c == ' ' {
                    return Err(FenParseError::FileDoesNotSumToEight);
                }

                // digits 1 through 8 indicate empty squares.
                if c.is_ascii_digit() {
                    if !('1'..='8').contains(&c) {
                        return Err(FenParseError::InvalidDigit);
                    }

                    col += (c as u8 - b'0') as i8;
                    if col > 8 {
                        return Err(FenParseError::FileDoesNotSumToEight);
                    }

                    iter.next();
                    continue;
                }

                // if it's not a digit, it represents a piece.
                let piece = Piece::try_from(c).map_err(|_| FenParseError::UnknownPiece(c))?;
                let square = Square::new(row, col).ok_or(FenParseError::FileDoesNotSumToEight)?;
                board.put(square, piece);
                iter.next();
                col += 1;
            }

            if row != 7 {
                eat(iter, '/')?;
            }
        }

        eat(iter, ' ')?;
        let side_to_move = eat_side_to_move(iter)?;
        match iter.next() {
            None | Some(' ') => {}
            Some(c) => return Err(FenParseError::UnexpectedChar(c)),
        }

        let mut kings = [None, None];
        for (sq, piece) in board.pieces() {
            if piece.kind != PieceKind::King {
                continue;
            }

            let slot = &mut kings[piece.color as usize];
            if slot.is_some() {
                return Err(FenParseError::ExtraKing(piece.color));
            }

            *slot = Some(sq);
        }

        let white_king = kings[Color::White as usize].ok_or(FenParseError::MissingKing(Color::White))?;
        let black_king = kings[Color::Black as usize].ok_or(FenParseError::MissingKing(Color::Black))?;
        Ok(GameState {
            board,
            side_to_move,
            move_log: Vec::new(),
            white_king,
            black_king,
        })
    }

    pub fn as_fen(&self) -> String {
        let mut buf = String::new();
        for row in 0..8 {
            let mut empty_squares = 0;
            for col in 0..8 {
                let piece = Square::new(row, col).and_then(|sq| self.board.piece_at(sq));
                if let Some(piece) = piece {
                    if empty_squares != 0 {
                        write!(&mut buf, "{}", empty_squares).unwrap();
                    }
                    write!(&mut buf, "{}", piece).unwrap();
                    empty_squares = 0;
                } else {
                    empty_squares += 1;
                }
            }

            if empty_squares != 0 {
                write!(&mut buf, "{}", empty_squares).unwrap();
            }

            if row != 7 {
                buf.push('/');
            }
        }

        buf.push(' ');
        match self.side_to_move {
            Color::White => buf.push('w'),
            Color::Black => buf.push('b'),
        }
        buf.push_str(" - - 0 1");
        buf
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "{} to move", self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    mod fen {
        use crate::core::*;
        use crate::game::{FenParseError, GameState};

        #[test]
        fn starting_position() {
            let pos = GameState::from_fen(
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            )
            .unwrap();
            assert_eq!(pos.board(), GameState::new().board());
            assert_eq!(pos.side_to_move(), Color::White);
            assert_eq!(pos.king(Color::White), E1);
            assert_eq!(pos.king(Color::Black), E8);
        }

        #[test]
        fn fen_smoke() {
            let pos = GameState::from_fen("8/8/8/8/8/8/8/k6K b").unwrap();
            assert_eq!(pos.side_to_move(), Color::Black);
            assert_eq!(pos.king(Color::Black), A1);
            assert_eq!(pos.king(Color::White), H1);
            assert_eq!(
                pos.piece_at(A1),
                Some(Piece::new(Color::Black, PieceKind::King))
            );
        }

        #[test]
        fn empty() {
            let err = GameState::from_fen("").unwrap_err();
            assert_eq!(FenParseError::UnexpectedEnd, err);
        }

        #[test]
        fn unknown_piece() {
            let err = GameState::from_fen("z7/8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
            assert_eq!(FenParseError::UnknownPiece('z'), err);
        }

        #[test]
        fn invalid_digit() {
            let err = GameState::from_fen("9/8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
            assert_eq!(FenParseError::InvalidDigit, err);
        }

        #[test]
        fn not_sum_to_8() {
            let err = GameState::from_fen("pppp5/8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
            assert_eq!(FenParseError::FileDoesNotSumToEight, err);
        }

        #[test]
        fn short_rank() {
            let err = GameState::from_fen("7/8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
            assert_eq!(FenParseError::FileDoesNotSumToEight, err);
            let err = GameState::from_fen("4k3/8/8/8/8/8/8/4K2 w - - 0 1").unwrap_err();
            assert_eq!(FenParseError::FileDoesNotSumToEight, err);
        }

        #[test]
        fn bad_side_to_move() {
            let err = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 c - - 0 1").unwrap_err();
            assert_eq!(FenParseError::InvalidSideToMove, err);
        }

        #[test]
        fn missing_king() {
            let err = GameState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap_err();
            assert_eq!(FenParseError::MissingKing(Color::Black), err);
        }

        #[test]
        fn extra_king() {
            let err = GameState::from_fen("4k3/8/8/8/8/8/8/K3K3 w - - 0 1").unwrap_err();
            assert_eq!(FenParseError::ExtraKing(Color::White), err);
        }

        #[test]
        fn gapped_ranks_roundtrip() {
            let str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b - - 0 1";
            let pos = GameState::from_fen(str).unwrap();
            assert_eq!(pos.as_fen(), str);
        }

        #[test]
        fn start_position_roundtrip() {
            let str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";
            let pos = GameState::from_fen(str).unwrap();
            assert_eq!(pos.as_fen(), str);
            assert_eq!(GameState::new().as_fen(), str);
        }
    }

    mod make {
        use crate::core::*;
        use crate::game::GameState;

        #[test]
        fn smoke_test_opening_pawn() {
            let mut pos = GameState::new();
            let mov = pos.find_move("e2e3").unwrap().unwrap();
            pos.make_move(mov);

            // it should now be Black's turn to move.
            assert_eq!(Color::Black, pos.side_to_move());

            // there should be a pawn on e3
            let pawn = pos.piece_at(E3).unwrap();
            assert_eq!(PieceKind::Pawn, pawn.kind);
            assert_eq!(Color::White, pawn.color);

            // there should not be a pawn on e2
            assert!(pos.piece_at(E2).is_none());
            assert_eq!(pos.move_log(), &[mov]);
        }

        #[test]
        fn basic_capture_and_undo() {
            let mut pos = GameState::from_fen("4k3/8/8/8/5p2/4P3/8/4K3 w - - 0 1").unwrap();
            let before = pos.board().clone();
            let mov = pos.find_move("e3f4").unwrap().unwrap();
            assert_eq!(
                mov.captured(),
                Some(Piece::new(Color::Black, PieceKind::Pawn))
            );
            pos.make_move(mov);

            // There should be a white pawn on F4
            let piece = pos.piece_at(F4).unwrap();
            assert_eq!(PieceKind::Pawn, piece.kind);
            assert_eq!(Color::White, piece.color);
            assert!(pos.piece_at(E3).is_none());

            // and the black pawn comes back on undo.
            assert_eq!(pos.undo_move(), Some(mov));
            assert_eq!(pos.board(), &before);
            assert_eq!(pos.side_to_move(), Color::White);
        }

        #[test]
        fn king_move_tracks_location() {
            let mut pos = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
            let mov = pos.find_move("e1d2").unwrap().unwrap();
            pos.make_move(mov);
            assert_eq!(pos.king(Color::White), D2);
            pos.undo_move();
            assert_eq!(pos.king(Color::White), E1);
        }

        #[test]
        fn undo_with_empty_log_is_noop() {
            let mut pos = GameState::new();
            assert_eq!(pos.undo_move(), None);
            assert_eq!(pos.board(), GameState::new().board());
            assert_eq!(pos.side_to_move(), Color::White);
        }

        #[test]
        #[should_panic(expected = "no piece at source square")]
        fn make_move_from_empty_square_panics() {
            let mut pos = GameState::new();
            let queen = Piece::new(Color::White, PieceKind::Queen);
            pos.make_move(Move::new(E4, E5, queen, None));
        }

        #[test]
        fn trial_reverts_on_drop() {
            let mut pos = GameState::new();
            let mov = pos.find_move("g1f3").unwrap().unwrap();
            {
                let trial = pos.trial(mov);
                assert_eq!(trial.side_to_move(), Color::Black);
                assert!(trial.piece_at(F3).is_some());
            }
            assert_eq!(pos.board(), GameState::new().board());
            assert!(pos.move_log().is_empty());
            assert_eq!(pos.side_to_move(), Color::White);
        }
    }

    mod legality {
        use std::collections::HashSet;

        use crate::core::*;
        use crate::game::{GameState, GameStatus};

        fn legal(fen: &str) -> HashSet<(Square, Square)> {
            let mut pos = GameState::from_fen(fen).unwrap();
            pos.valid_moves()
                .iter()
                .map(|m| (m.source(), m.destination()))
                .collect()
        }

        #[test]
        fn twenty_moves_from_start() {
            let mut pos = GameState::new();
            let moves = pos.valid_moves();
            assert_eq!(moves.len(), 20);
            let pawn_moves = moves
                .iter()
                .filter(|m| m.moved().kind == PieceKind::Pawn)
                .count();
            assert_eq!(pawn_moves, 16);
            assert_eq!(moves.len() - pawn_moves, 4);
        }

        #[test]
        fn rook_check_on_open_file() {
            let moves = legal("4k3/8/8/4R3/8/8/8/4K3 b - - 0 1");
            let expected: HashSet<_> = [(E8, D7), (E8, D8), (E8, F7), (E8, F8)]
                .iter()
                .cloned()
                .collect();
            assert_eq!(moves, expected);
        }

        #[test]
        fn single_check_block_or_capture() {
            // rook e5 checks e8. The knight on c6 can block on e7 or capture on e5, the rook on a5 can capture on
            // e5, and the pawn on h7 can do neither.
            let fen = "4k3/7p/2n5/r3R3/8/8/8/4K3 b - - 0 1";
            let mut pos = GameState::from_fen(fen).unwrap();
            let king = pos.king(Color::Black);
            let on_ray = [E7, E6, E5];
            for mov in pos.valid_moves() {
                if mov.source() != king {
                    assert!(
                        on_ray.contains(&mov.destination()),
                        "{} does not resolve the check",
                        mov
                    );
                }
            }

            let moves = legal(fen);
            assert!(moves.contains(&(C6, E7)));
            assert!(moves.contains(&(C6, E5)));
            assert!(moves.contains(&(A5, E5)));
            assert!(!moves.iter().any(|&(src, _)| src == H7));
        }

        #[test]
        fn knight_check_must_be_captured() {
            // knight d6 checks e8; the rook on d2 can take it, nothing can block.
            let fen = "4k3/8/3N4/8/8/8/3r4/4K3 b - - 0 1";
            let moves = legal(fen);
            assert!(moves.contains(&(D2, D6)));
            for &(src, dst) in &moves {
                if src != E8 {
                    assert_eq!(dst, D6);
                }
            }
        }

        #[test]
        fn double_check_only_king_moves() {
            let mut pos = GameState::from_fen("4k3/8/2n2N2/r3R3/8/8/8/4K3 b - - 0 1").unwrap();
            let moves = pos.valid_moves();
            assert!(!moves.is_empty());
            for mov in moves {
                assert!(mov.is_king_move(), "{} is not a king move", mov);
            }
        }

        #[test]
        fn pinned_knight_contributes_nothing() {
            let moves = legal("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1");
            assert!(!moves.iter().any(|&(src, _)| src == E2));
            let moves = legal("4k3/8/8/8/1b6/8/3N4/4K3 w - - 0 1");
            assert!(!moves.iter().any(|&(src, _)| src == D2));
        }

        #[test]
        fn pinned_piece_may_capture_pinner() {
            let moves = legal("4k3/8/8/8/1b6/8/3B4/4K3 w - - 0 1");
            assert!(moves.contains(&(D2, B4)));
            assert!(moves.contains(&(D2, C3)));
            assert!(!moves.contains(&(D2, E3)));
        }

        #[test]
        fn every_move_leaves_king_safe() {
            for fen in &[
                "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
                "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
                "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w - - 0 1",
                "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w - - 1 8",
            ] {
                let mut pos = GameState::from_fen(fen).unwrap();
                let us = pos.side_to_move();
                for mov in pos.valid_moves() {
                    let trial = pos.trial(mov);
                    assert!(!trial.is_king_attacked(us), "{} leaves the king in check", mov);
                }
            }
        }

        #[test]
        fn checkmate_status() {
            // fool's mate
            let mut pos = GameState::from_fen(
                "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w - - 1 3",
            )
            .unwrap();
            assert!(pos.is_check());
            assert!(pos.valid_moves().is_empty());
            assert_eq!(pos.status(), GameStatus::Checkmate);
        }

        #[test]
        fn no_legal_moves_status() {
            let mut pos = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
            assert!(!pos.is_check());
            assert_eq!(pos.status(), GameStatus::NoLegalMoves);
            assert_eq!(GameState::new().status(), GameStatus::Ongoing);
        }

        #[test]
        fn find_move_rejects_illegal_and_malformed() {
            let mut pos = GameState::new();
            assert_eq!(pos.find_move("e2e5").unwrap(), None);
            assert!(pos.find_move("e2").is_err());
            assert!(pos.find_move("e2e4").unwrap().is_some());
        }

        #[test]
        fn valid_moves_restores_state() {
            let mut pos = GameState::from_fen(
                "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
            )
            .unwrap();
            let board = pos.board().clone();
            let first = pos.valid_moves();
            assert_eq!(pos.board(), &board);
            assert!(pos.move_log().is_empty());
            assert_eq!(pos.side_to_move(), Color::White);
            assert_eq!(pos.valid_moves(), first);
        }
    }
}
