//! Headless replay of board interaction.
//!
//! Loads a board in text form, feeds a script of pointer, click and input
//! events through [`numelace_highlight::BoardController`] and renders the
//! resulting highlight state, so interaction scenarios can be checked without
//! a browser.

use std::{fs, io::Write, path::Path};

use numelace_highlight::{BoardController, MemoryBoard};

pub use self::error::ReplayError;

mod error;
pub mod render;
pub mod script;

/// How a replay reports progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Render the board after every step instead of only after the last one.
    pub every_step: bool,
    /// Re-evaluate digit matches on input changes.
    pub track_input_changes: bool,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            every_step: true,
            track_input_changes: true,
        }
    }
}

/// Reads a file into a string, tagging errors with the path.
///
/// # Errors
///
/// Returns [`ReplayError::Read`] if the file cannot be read.
pub fn read_file(path: &Path) -> Result<String, ReplayError> {
    fs::read_to_string(path).map_err(|source| ReplayError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Replays `script` on `board`, writing rendered boards to `out`.
///
/// Returns the controller in its final state.
///
/// # Errors
///
/// Returns an error if the board or script is malformed, a step cannot be
/// applied, or writing to `out` fails.
pub fn replay<W>(
    board: &str,
    script: &str,
    options: ReplayOptions,
    out: &mut W,
) -> Result<BoardController<MemoryBoard>, ReplayError>
where
    W: Write,
{
    let board: MemoryBoard = board.parse()?;
    let script = script::parse_script(script)?;
    let mut controller =
        BoardController::new(board).with_input_tracking(options.track_input_changes);
    log::info!("replaying {} steps", script.len());

    for line in &script {
        line.apply(&mut controller)?;
        if options.every_step {
            writeln!(out, "== line {}: {:?}", line.line, line.step)?;
            write!(out, "{}", render::render(controller.surface(), controller.selection()))?;
        }
    }
    if !options.every_step {
        write!(out, "{}", render::render(controller.surface(), controller.selection()))?;
    }
    Ok(controller)
}
