//! Event scripts.
//!
//! A script lists one event per line:
//!
//! ```text
//! # hover the top-left cell, then select its digit
//! enter 0 0
//! click 0 0
//! input 4 4 5
//! leave 0 0
//! ```
//!
//! Coordinates are `row col`, both `0`-`8`. `input` takes the new input value
//! as the rest of the line, at most one character wide; omitting it clears the
//! input. Blank lines and lines
//! starting with `#` are ignored.

use numelace_highlight::{BoardController, BoardEvent, GRID_SIDE, MemoryBoard};

use crate::ReplayError;

/// A cell on a standard board, as `(row, col)`.
pub type Cell = (usize, usize);

/// One scripted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Pointer enters the cell.
    Enter(Cell),
    /// Pointer leaves the cell.
    Leave(Cell),
    /// The cell is clicked.
    Click(Cell),
    /// The cell's input is set to `value`.
    Input {
        /// Edited cell.
        cell: Cell,
        /// New input value.
        value: String,
    },
}

/// A step together with the script line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based line number.
    pub line: usize,
    /// The scripted event.
    pub step: Step,
}

/// Reasons a script line can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ScriptErrorKind {
    /// The line starts with an unknown command.
    #[display("unknown command {command:?}")]
    UnknownCommand {
        /// The command word.
        command: String,
    },
    /// A coordinate is missing.
    #[display("expected `row col` coordinates")]
    MissingCoordinate,
    /// A coordinate is not a number in range.
    #[display("invalid coordinate {value:?}, expected 0-8")]
    InvalidCoordinate {
        /// The offending token.
        value: String,
    },
    /// An `input` value does not fit in one cell.
    #[display("input value {value:?} is wider than one cell")]
    InvalidValue {
        /// The offending value.
        value: String,
    },
    /// A pointer or click line has extra tokens.
    #[display("unexpected trailing arguments")]
    TrailingArguments,
}

/// A rejected script line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("line {line}: {kind}")]
pub struct ScriptError {
    /// 1-based line number.
    pub line: usize,
    /// What was wrong with it.
    #[error(source)]
    pub kind: ScriptErrorKind,
}

/// Parses a script.
///
/// # Errors
///
/// Returns the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut steps = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let step = parse_step(trimmed).map_err(|kind| ScriptError { line, kind })?;
        steps.push(ScriptLine { line, step });
    }
    Ok(steps)
}

fn parse_step(line: &str) -> Result<Step, ScriptErrorKind> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().unwrap_or_default();
    let make: fn(Cell) -> Step = match command {
        "enter" => Step::Enter,
        "leave" => Step::Leave,
        "click" => Step::Click,
        "input" => {
            let cell = parse_cell(&mut tokens)?;
            let value = tokens.collect::<Vec<_>>().join(" ");
            if value.chars().count() > 1 {
                return Err(ScriptErrorKind::InvalidValue { value });
            }
            return Ok(Step::Input { cell, value });
        }
        _ => {
            return Err(ScriptErrorKind::UnknownCommand {
                command: command.to_owned(),
            });
        }
    };
    let cell = parse_cell(&mut tokens)?;
    if tokens.next().is_some() {
        return Err(ScriptErrorKind::TrailingArguments);
    }
    Ok(make(cell))
}

fn parse_cell<'a, I>(tokens: &mut I) -> Result<Cell, ScriptErrorKind>
where
    I: Iterator<Item = &'a str>,
{
    let mut coordinate = || -> Result<usize, ScriptErrorKind> {
        let token = tokens.next().ok_or(ScriptErrorKind::MissingCoordinate)?;
        token
            .parse::<usize>()
            .ok()
            .filter(|&value| value < GRID_SIDE)
            .ok_or_else(|| ScriptErrorKind::InvalidCoordinate {
                value: token.to_owned(),
            })
    };
    let row = coordinate()?;
    let col = coordinate()?;
    Ok((row, col))
}

impl ScriptLine {
    /// Delivers the step to `controller`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::NotEditable`] if an `input` step targets a cell
    /// without an editable input.
    pub fn apply(
        &self,
        controller: &mut BoardController<MemoryBoard>,
    ) -> Result<(), ReplayError> {
        let index = |(row, col): Cell| MemoryBoard::cell_at(row, col);
        let event = match &self.step {
            Step::Enter(cell) => BoardEvent::PointerEnter(index(*cell)),
            Step::Leave(cell) => BoardEvent::PointerLeave(index(*cell)),
            Step::Click(cell) => BoardEvent::Click(index(*cell)),
            Step::Input { cell, value } => {
                if !controller.surface_mut().set_input(index(*cell), value) {
                    return Err(ReplayError::NotEditable {
                        line: self.line,
                        row: cell.0,
                        col: cell.1,
                    });
                }
                BoardEvent::InputChanged(index(*cell))
            }
        };
        log::debug!("line {}: {event:?}", self.line);
        controller.handle(event);
        Ok(())
    }
}
