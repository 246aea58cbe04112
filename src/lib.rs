// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `ply` generates legal chess moves on a plain 64-square board.
//!
//! Legality is decided from the king outward: one scan from the king square finds every check and every pinned
//! piece, the per-piece generators honor the pins, and the checks narrow the candidate moves down to those that
//! answer them. A final make/undo pass confirms that no surviving move leaves the king attacked.
//!
//! Castling, en passant and promotion are not modeled.

pub mod core;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod playout;
pub mod scan;
pub mod shell;
pub mod tracing;

pub use game::GameState;
