// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `tracing` module interfaces with the `tracing` crate to instrument legal move generation, so that the
//! decisions made for a position (which checks were found, which moves the king-safety pass threw away) can be
//! inspected after the fact.

pub mod constants;
pub mod legality;

use tracing_subscriber::EnvFilter;

/// Name of the environment variable holding the log filter directives for the `ply` binaries.
pub const LOG_ENV: &str = "PLY_LOG";

/// The log filter for the `ply` binaries: directives from `PLY_LOG` if set and valid, warnings and errors otherwise.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}
