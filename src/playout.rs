// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random playouts: games of uniformly random legal moves, used to reach positions nobody thought to write a test
//! for.

use rand::{seq::SliceRandom, Rng};

use crate::{
    core::Move,
    game::{GameState, GameStatus},
};

/// Picks one of the side to move's legal moves at random, or `None` if there are none.
pub fn random_move<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Option<Move> {
    state.valid_moves().choose(rng).copied()
}

/// Plays random legal moves on `state` until the side to move has none or `max_plies` moves have been made. The
/// moves stay on the board and in the move log; the status of the final position is returned.
pub fn playout<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R, max_plies: usize) -> GameStatus {
    for _ in 0..max_plies {
        match random_move(state, rng) {
            Some(mov) => state.make_move(mov),
            None => break,
        }
    }

    state.status()
}
