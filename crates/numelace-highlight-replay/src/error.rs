use std::{io, path::PathBuf};

use numelace_highlight::ParseBoardError;

use crate::script::ScriptError;

/// Errors that can occur while replaying a script.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ReplayError {
    /// An input file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    #[from(skip)]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Writing the rendered board failed.
    #[display("failed to write output: {_0}")]
    Write(io::Error),
    /// The board text is malformed.
    #[display("invalid board: {_0}")]
    Board(ParseBoardError),
    /// The script is malformed.
    #[display("invalid script: {_0}")]
    Script(ScriptError),
    /// An `input` step targets a given.
    #[display("line {line}: cell ({row}, {col}) has no editable input")]
    #[from(skip)]
    NotEditable {
        /// Script line of the step.
        line: usize,
        /// Row of the targeted cell.
        row: usize,
        /// Column of the targeted cell.
        col: usize,
    },
}
