// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A small line-oriented shell for poking at a game by hand. Commands are read one per line:
//!
//! ```text
//! position startpos [moves e2e4 ...]
//! position fen <FEN> [moves e2e4 ...]
//! moves
//! make e2e4
//! undo
//! show
//! status
//! perft <depth>
//! quit
//! ```

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context};

use crate::{game::GameState, perft};

pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> anyhow::Result<()> {
    let mut shell = Shell::new();
    for maybe_line in input.lines() {
        let line = maybe_line?;
        let components: Vec<_> = line.split_whitespace().collect();
        let (&command, arguments) = components.split_first().unwrap_or((&"", &[]));
        let result = match (command, arguments) {
            ("", []) => Ok(()),
            ("quit", []) => break,
            ("position", args) => shell.handle_position(args),
            ("moves", []) => shell.handle_moves(&mut output),
            ("make", [mov]) => shell.handle_make(mov),
            ("undo", []) => shell.handle_undo(),
            ("show", []) => shell.handle_show(&mut output),
            ("status", []) => shell.handle_status(&mut output),
            ("perft", [depth]) => shell.handle_perft(depth, &mut output),
            _ => Err(anyhow!("unrecognized command: {} {:?}", command, arguments)),
        };

        if let Err(e) = result {
            ::tracing::debug!("command failed: {:#}", e);
            writeln!(output, "error: {:#}", e)?;
        }
        output.flush()?;
    }

    Ok(())
}

struct Shell {
    state: GameState,
}

impl Shell {
    fn new() -> Shell {
        Shell {
            state: GameState::new(),
        }
    }

    fn handle_position(&mut self, args: &[&str]) -> anyhow::Result<()> {
        let mut iter = args.iter().cloned().peekable();
        let mut state = match iter.next() {
            Some("startpos") => GameState::new(),
            Some("fen") => {
                let mut fields = Vec::new();
                while let Some(&field) = iter.peek() {
                    if field == "moves" {
                        break;
                    }
                    fields.push(field);
                    iter.next();
                }

                if fields.is_empty() {
                    bail!("FEN string expected");
                }
                GameState::from_fen(fields.join(" "))?
            }
            Some(tok) => bail!("unknown token: {}", tok),
            None => bail!("expected startpos or fen"),
        };

        match iter.next() {
            Some("moves") => {
                for text in iter {
                    let mov = state
                        .find_move(text)?
                        .ok_or_else(|| anyhow!("illegal move: {}", text))?;
                    state.make_move(mov);
                }
            }
            Some(tok) => bail!("unknown token: {}", tok),
            None => {}
        }

        self.state = state;
        Ok(())
    }

    fn handle_moves<W: Write>(&mut self, output: &mut W) -> anyhow::Result<()> {
        let moves: Vec<_> = self
            .state
            .valid_moves()
            .iter()
            .map(|mov| mov.as_uci())
            .collect();
        writeln!(output, "{}", moves.join(" "))?;
        Ok(())
    }

    fn handle_make(&mut self, text: &str) -> anyhow::Result<()> {
        let mov = self
            .state
            .find_move(text)?
            .ok_or_else(|| anyhow!("illegal move: {}", text))?;
        self.state.make_move(mov);
        Ok(())
    }

    /// Takes back the last move. With nothing to take back, does nothing.
    fn handle_undo(&mut self) -> anyhow::Result<()> {
        self.state.undo_move();
        Ok(())
    }

    fn handle_show<W: Write>(&mut self, output: &mut W) -> anyhow::Result<()> {
        write!(output, "{}", self.state)?;
        writeln!(output, "{}", self.state.as_fen())?;
        Ok(())
    }

    fn handle_status<W: Write>(&mut self, output: &mut W) -> anyhow::Result<()> {
        writeln!(output, "{:?}", self.state.status())?;
        Ok(())
    }

    fn handle_perft<W: Write>(&mut self, depth: &str, output: &mut W) -> anyhow::Result<()> {
        let depth: u32 = depth
            .parse()
            .with_context(|| format!("invalid depth: {}", depth))?;
        let mut total = 0;
        for (mov, nodes) in perft::divide(&mut self.state, depth) {
            writeln!(output, "{}: {}", mov, nodes)?;
            total += nodes;
        }

        writeln!(output, "total: {}", total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> String {
        let mut output = Vec::new();
        run(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn moves_from_start() {
        let out = session("moves\n");
        assert_eq!(out.trim().split(' ').count(), 20);
        assert!(out.contains("e2e4"));
        assert!(out.contains("g1f3"));
    }

    #[test]
    fn make_and_undo() {
        let out = session("make e2e4\nshow\nundo\nshow\n");
        assert!(out.contains("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1"));
        assert!(out.contains("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"));
        assert!(!out.contains("error"));
    }

    #[test]
    fn position_fen_with_moves() {
        let out = session("position fen 4k3/8/8/4R3/8/8/8/4K3 b - - 0 1 moves e8d8\nshow\n");
        assert!(out.contains("3k4/8/8/4R3/8/8/8/4K3 w - - 0 1"));
    }

    #[test]
    fn position_startpos_with_moves() {
        let out = session("position startpos moves e2e4 e7e5\nshow\n");
        assert!(out.contains("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w - - 0 1"));
    }

    #[test]
    fn status_reports_checkmate() {
        let out = session("position startpos moves f2f3 e7e5 g2g4 d8h4\nstatus\n");
        assert_eq!(out.trim(), "Checkmate");
    }

    #[test]
    fn perft_prints_total() {
        let out = session("perft 2\n");
        assert!(out.contains("total: 400"));
        assert!(out.contains("e2e4: 20"));
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let out = session("make e2e5\nbogus\nperft x\nmoves\n");
        assert_eq!(out.matches("error:").count(), 3);
        assert!(out.contains("e2e4"));
    }

    #[test]
    fn undo_with_nothing_to_undo_is_silent() {
        let out = session("undo\nshow\n");
        assert!(!out.contains("error"));
        assert!(out.contains("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"));
    }

    #[test]
    fn quit_stops_reading() {
        let out = session("quit\nmoves\n");
        assert!(out.is_empty());
    }
}
