// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fs::File, io, path::PathBuf};

use anyhow::Context;
use ply::{tracing::legality::LegalityLogLayer, GameState};
use structopt::StructOpt;
use tracing_subscriber::{fmt, prelude::*};

/// Lists the legal moves of a position.
#[derive(Debug, StructOpt)]
struct Options {
    /// FEN representation of the position to analyze. Defaults to the starting position.
    #[structopt(name = "FEN")]
    fen: Option<String>,

    /// Print the moves as a JSON array instead of one per line.
    #[structopt(long)]
    json: bool,

    /// File to write a legality event log to.
    #[structopt(long)]
    event_log: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Options::from_args();
    let event_log = match args.event_log {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open event log {}", path.display()))?;
            Some(LegalityLogLayer::new(file))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_filter(ply::tracing::env_filter()),
        )
        .with(event_log)
        .init();

    let mut state = match args.fen {
        Some(ref fen) => GameState::from_fen(fen).context("invalid FEN")?,
        None => GameState::new(),
    };

    let moves = state.valid_moves();
    if args.json {
        println!("{}", serde_json::to_string(&moves)?);
    } else {
        for mov in moves {
            println!("{}", mov.as_uci());
        }
    }

    Ok(())
}
