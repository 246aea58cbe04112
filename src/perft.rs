// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Perft, a count of the leaves of the legal move tree. Comparing counts against published values is the quickest
//! way to find a move generator bug; `divide` narrows a mismatch down to the root move responsible.

use crate::{core::Move, game::GameState};

/// Counts the leaf nodes of the legal move tree rooted at `state`, `depth` plies deep.
pub fn perft(state: &mut GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.valid_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mov in moves {
        state.make_move(mov);
        nodes += perft(state, depth - 1);
        state.undo_move();
    }

    nodes
}

/// Perft split by root move: every legal move paired with the number of leaves below it.
pub fn divide(state: &mut GameState, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    state
        .valid_moves()
        .into_iter()
        .map(|mov| {
            state.make_move(mov);
            let nodes = perft(state, depth - 1);
            state.undo_move();
            (mov, nodes)
        })
        .collect()
}
