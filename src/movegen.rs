// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-legal move generation, pruned by pins.
//!
//! Every generator takes the pin list produced by `scan::scan` and consumes the entry for the square it generates
//! from, if there is one. A pinned piece only produces moves along its pin line. King moves are not pin-filtered;
//! instead each king destination is re-scanned as if the king stood there.
use crate::core::*;
use crate::scan::{self, Pin};

/// Removes the pin on `sq` from `pins`, returning its direction.
fn take_pin(pins: &mut Vec<Pin>, sq: Square) -> Option<Direction> {
    let index = pins.iter().rposition(|pin| pin.square == sq)?;
    Some(pins.remove(index).direction)
}

fn allowed(pin: Option<Direction>, dir: Direction) -> bool {
    pin.map_or(true, |pin| pin.is_aligned(dir))
}

pub fn generate_pawn_moves(
    board: &Board,
    sq: Square,
    us: Color,
    pins: &mut Vec<Pin>,
    moves: &mut Vec<Move>,
) {
    let pin = take_pin(pins, sq);
    let pawn = Piece::new(us, PieceKind::Pawn);
    let forward = us.pawn_push();

    // Single and double pawn pushes. A pawn that has reached the last rank has nowhere to go.
    if let Some(single) = sq.towards(forward) {
        if board.is_empty(single) && allowed(pin, forward) {
            moves.push(Move::new(sq, single, pawn, None));
            if sq.row() == us.pawn_start_row() {
                if let Some(double) = single.towards(forward) {
                    if board.is_empty(double) {
                        moves.push(Move::new(sq, double, pawn, None));
                    }
                }
            }
        }
    }

    for dir in pawn_capture_directions(us) {
        let target = match sq.towards(dir) {
            Some(target) => target,
            None => continue,
        };

        if let Some(victim) = board.piece_at(target) {
            if victim.color != us && allowed(pin, dir) {
                moves.push(Move::new(sq, target, pawn, Some(victim)));
            }
        }
    }
}

/// Walks each of `dirs` from `sq` up to the first blocker, skipping directions off of the pin line.
fn generate_slides(
    board: &Board,
    sq: Square,
    moved: Piece,
    pin: Option<Direction>,
    dirs: &[Direction],
    moves: &mut Vec<Move>,
) {
    for &dir in dirs {
        if !allowed(pin, dir) {
            continue;
        }

        for target in ray(sq, dir) {
            match board.piece_at(target) {
                None => moves.push(Move::new(sq, target, moved, None)),
                Some(victim) if victim.color != moved.color => {
                    moves.push(Move::new(sq, target, moved, Some(victim)));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

pub fn generate_rook_moves(
    board: &Board,
    sq: Square,
    us: Color,
    pins: &mut Vec<Pin>,
    moves: &mut Vec<Move>,
) {
    let pin = take_pin(pins, sq);
    let rook = Piece::new(us, PieceKind::Rook);
    generate_slides(board, sq, rook, pin, &ORTHOGONALS, moves);
}

pub fn generate_bishop_moves(
    board: &Board,
    sq: Square,
    us: Color,
    pins: &mut Vec<Pin>,
    moves: &mut Vec<Move>,
) {
    let pin = take_pin(pins, sq);
    let bishop = Piece::new(us, PieceKind::Bishop);
    generate_slides(board, sq, bishop, pin, &DIAGONALS, moves);
}

/// Queens move as a rook and a bishop from the same square. The pin is looked up once and applies to both.
pub fn generate_queen_moves(
    board: &Board,
    sq: Square,
    us: Color,
    pins: &mut Vec<Pin>,
    moves: &mut Vec<Move>,
) {
    let pin = take_pin(pins, sq);
    let queen = Piece::new(us, PieceKind::Queen);
    generate_slides(board, sq, queen, pin, &ORTHOGONALS, moves);
    generate_slides(board, sq, queen, pin, &DIAGONALS, moves);
}

pub fn generate_knight_moves(
    board: &Board,
    sq: Square,
    us: Color,
    pins: &mut Vec<Pin>,
    moves: &mut Vec<Move>,
) {
    // A knight never lands on the line it leaves, so a pinned knight can't move at all.
    if take_pin(pins, sq).is_some() {
        return;
    }

    let knight = Piece::new(us, PieceKind::Knight);
    for target in knight_targets(sq) {
        match board.piece_at(target) {
            Some(piece) if piece.color == us => {}
            captured => moves.push(Move::new(sq, target, knight, captured)),
        }
    }
}

/// Generates king steps that do not walk into check. Each destination is scanned as if the king already stood on
/// it; the scanner looks through the king's current square, so stepping straight back along a checking ray is
/// refused.
pub fn generate_king_moves(board: &Board, sq: Square, us: Color, moves: &mut Vec<Move>) {
    let king = Piece::new(us, PieceKind::King);
    for (_, target) in king_targets(sq) {
        let captured = board.piece_at(target);
        if matches!(captured, Some(piece) if piece.color == us) {
            continue;
        }

        if !scan::scan(board, target, us).in_check() {
            moves.push(Move::new(sq, target, king, captured));
        }
    }
}

/// Generates the moves of `piece`, standing on `sq`.
pub fn generate_piece_moves(
    board: &Board,
    sq: Square,
    piece: Piece,
    pins: &mut Vec<Pin>,
    moves: &mut Vec<Move>,
) {
    let us = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, sq, us, pins, moves),
        PieceKind::Knight => generate_knight_moves(board, sq, us, pins, moves),
        PieceKind::Bishop => generate_bishop_moves(board, sq, us, pins, moves),
        PieceKind::Rook => generate_rook_moves(board, sq, us, pins, moves),
        PieceKind::Queen => generate_queen_moves(board, sq, us, pins, moves),
        PieceKind::King => generate_king_moves(board, sq, us, moves),
    }
}

/// Generates the moves of every piece of color `us`, in board order.
pub fn generate_moves(board: &Board, us: Color, pins: &mut Vec<Pin>, moves: &mut Vec<Move>) {
    for (sq, piece) in board.pieces_of(us) {
        generate_piece_moves(board, sq, piece, pins, moves);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::generate_moves;
    use crate::core::*;
    use crate::game::GameState;

    fn generated_from(fen: &'static str, source: Square) -> HashSet<(Square, Square)> {
        let state = GameState::from_fen(fen).unwrap();
        let mut pins = state.scan().pins;
        let mut moves = Vec::new();
        generate_moves(state.board(), state.side_to_move(), &mut pins, &mut moves);
        moves
            .iter()
            .filter(|m| m.source() == source)
            .map(|m| (m.source(), m.destination()))
            .collect()
    }

    fn assert_moves_generated(fen: &'static str, source: Square, expected: &[Square]) {
        let actual = generated_from(fen, source);
        let expected: HashSet<_> = expected.iter().map(|&dest| (source, dest)).collect();
        if actual != expected {
            let state = GameState::from_fen(fen).unwrap();
            println!("{}", state);
            println!("expected: {:?}", expected);
            println!("actual:   {:?}", actual);
            panic!("move sets differ for piece on {}", source);
        }
    }

    fn assert_no_moves(fen: &'static str, source: Square) {
        assert_moves_generated(fen, source, &[]);
    }

    mod pawns {
        use super::*;

        #[test]
        fn white_single_and_double_push() {
            assert_moves_generated("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", E2, &[E3, E4]);
        }

        #[test]
        fn black_single_and_double_push() {
            assert_moves_generated("4k3/4p3/8/8/8/8/8/4K3 b - - 0 1", E7, &[E6, E5]);
        }

        #[test]
        fn no_double_push_off_start_rank() {
            assert_moves_generated("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1", E3, &[E4]);
        }

        #[test]
        fn no_double_pawn_push_when_blocked() {
            assert_moves_generated("4k3/8/8/8/4p3/8/4P3/4K3 w - - 0 1", E2, &[E3]);
        }

        #[test]
        fn no_pawn_push_when_target_square_occupied() {
            assert_no_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", E2);
        }

        #[test]
        fn captures_enemies_only() {
            assert_moves_generated(
                "4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1",
                E2,
                &[E3, E4, D3],
            );
        }

        #[test]
        fn last_rank_pawn_is_stuck() {
            assert_no_moves("P3k3/8/8/8/8/8/8/4K3 w - - 0 1", A8);
        }

        #[test]
        fn file_pinned_pawn_may_push() {
            assert_moves_generated("4k3/4r3/8/8/8/8/4P3/4K3 w - - 0 1", E2, &[E3, E4]);
        }

        #[test]
        fn diagonally_pinned_pawn_may_only_take_pinner() {
            assert_moves_generated("4k3/8/8/8/8/5b2/4P3/3K4 w - - 0 1", E2, &[F3]);
        }

        #[test]
        fn diagonally_pinned_black_pawn_may_not_double_push() {
            assert_no_moves("4k3/3p4/8/8/B7/8/8/4K3 b - - 0 1", D7);
        }
    }

    mod knights {
        use super::*;

        #[test]
        fn center_knight() {
            assert_moves_generated(
                "4k3/8/8/8/3N4/8/8/4K3 w - - 0 1",
                D4,
                &[C6, E6, B5, F5, B3, F3, C2, E2],
            );
        }

        #[test]
        fn start_position_knight() {
            assert_moves_generated(
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
                B1,
                &[A3, C3],
            );
        }

        #[test]
        fn pinned_knight_is_frozen() {
            assert_no_moves("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1", E2);
            assert_no_moves("4k3/8/8/8/1b6/8/3N4/4K3 w - - 0 1", D2);
        }
    }

    mod sliders {
        use super::*;

        #[test]
        fn open_rook() {
            assert_moves_generated(
                "4k3/8/8/8/3R4/8/8/4K3 w - - 0 1",
                D4,
                &[D5, D6, D7, D8, D3, D2, D1, A4, B4, C4, E4, F4, G4, H4],
            );
        }

        #[test]
        fn rook_stops_at_blockers() {
            assert_moves_generated(
                "4k3/8/3p4/8/3R4/8/3P4/4K3 w - - 0 1",
                D4,
                &[D5, D6, D3, A4, B4, C4, E4, F4, G4, H4],
            );
        }

        #[test]
        fn file_pinned_rook_stays_on_file() {
            assert_moves_generated(
                "4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1",
                E2,
                &[E3, E4, E5, E6, E7],
            );
        }

        #[test]
        fn file_pinned_bishop_is_frozen() {
            assert_no_moves("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1", E2);
        }

        #[test]
        fn diagonally_pinned_bishop_slides_on_diagonal() {
            assert_moves_generated("4k3/8/8/8/1b6/8/3B4/4K3 w - - 0 1", D2, &[C3, B4]);
        }

        #[test]
        fn diagonally_pinned_queen_slides_on_diagonal() {
            assert_moves_generated("4k3/8/8/8/1b6/8/3Q4/4K3 w - - 0 1", D2, &[C3, B4]);
        }

        #[test]
        fn open_queen() {
            assert_moves_generated(
                "4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1",
                D4,
                &[
                    D5, D6, D7, D8, D3, D2, D1, A4, B4, C4, E4, F4, G4, H4, E5, F6, G7, H8, C5,
                    B6, A7, E3, F2, G1, C3, B2, A1,
                ],
            );
        }
    }

    mod kings {
        use super::*;

        #[test]
        fn king_does_not_retreat_along_check_ray() {
            assert_moves_generated("4k3/8/8/8/8/8/8/r3K3 w - - 0 1", E1, &[D2, E2, F2]);
        }

        #[test]
        fn king_captures_undefended_piece() {
            assert_moves_generated("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1", E1, &[D2, F1]);
        }

        #[test]
        fn king_does_not_capture_defended_piece() {
            assert_moves_generated("4k3/8/8/8/8/2b5/3r4/4K3 w - - 0 1", E1, &[F1]);
        }

        #[test]
        fn kings_keep_their_distance() {
            assert_moves_generated("8/8/8/8/8/4k3/8/4K3 w - - 0 1", E1, &[D1, F1]);
        }
    }
}
