// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tracing constants that are used elsewhere in ply.
//!
//! The code in `ply::tracing` operates by creating spans and messages with known string values, so that they can be
//! interpreted by `tracing` Layers that are operating upon them. This module collects them all in one place.

/// The name of a span representing a call to `GameState::valid_moves`.
pub const VALID_MOVES: &str = "valid_moves";

/// The side to move was found to be in check. Carries the number of checking pieces.
pub const CHECK_DETECTED: &str = "check detected";

/// The king-safety pass threw away a move that would have left the mover's king in check.
pub const MOVE_REJECTED: &str = "move rejected by king safety";

/// Legal move generation finished. Carries the number of legal moves.
pub const VALID_MOVES_COMPLETE: &str = "valid moves complete";
