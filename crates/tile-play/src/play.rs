use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use tile_engine::session::Session;

use crate::input::{parse_command, Command};
use crate::render;

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    GameOver,
    Quit,
    EndOfInput,
}

/// Drive `session` from line-based `input`, drawing to `out`.
///
/// The game-over check runs before every read so a locked board ends the
/// loop without waiting for input. The board is redrawn only after a move
/// that changed it or after a reset.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    show_help: bool,
) -> Result<Exit> {
    render::draw(out, session, show_help).context("failed to draw board")?;
    let mut lines = input.lines();
    loop {
        if session.is_game_over() {
            info!("No moves left; final score {}", session.score());
            return Ok(Exit::GameOver);
        }
        out.flush().context("failed to flush output")?;
        let line = match lines.next() {
            Some(line) => line.context("failed to read input")?,
            None => return Ok(Exit::EndOfInput),
        };
        match parse_command(&line) {
            Command::Move(dir) => {
                let outcome = session.apply_move(dir);
                if outcome.changed {
                    render::draw(out, session, show_help).context("failed to draw board")?;
                } else {
                    debug!("move {} changed nothing", dir);
                }
            }
            Command::Reset => {
                session.reset();
                render::draw(out, session, show_help).context("failed to draw board")?;
            }
            Command::Quit => return Ok(Exit::Quit),
            Command::Unknown => {
                writeln!(out, "{}", render::HELP).context("failed to write help")?;
            }
        }
    }
}
