// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::time::Instant;

use anyhow::Context;
use ply::{perft, GameState};
use structopt::StructOpt;
use tracing_subscriber::FmtSubscriber;

/// Counts the leaves of the legal move tree of a position.
#[derive(Debug, StructOpt)]
struct Options {
    /// The depth to search to.
    #[structopt(short, long)]
    depth: u32,

    /// FEN representation of the position to analyze. Defaults to the starting position.
    #[structopt(name = "FEN")]
    fen: Option<String>,

    /// If set, print the node count below each root move.
    #[structopt(long)]
    divide: bool,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(ply::tracing::env_filter())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let ops = Options::from_args();
    let mut state = match ops.fen {
        Some(ref fen) => GameState::from_fen(fen).context("invalid FEN")?,
        None => GameState::new(),
    };

    let start = Instant::now();
    let count = if ops.divide {
        let mut total = 0;
        for (mov, nodes) in perft::divide(&mut state, ops.depth) {
            println!("{}: {}", mov, nodes);
            total += nodes;
        }
        println!();
        total
    } else {
        perft::perft(&mut state, ops.depth)
    };

    println!("{}", count);
    tracing::info!(nodes = count, elapsed = ?start.elapsed(), "perft complete");
    Ok(())
}
