//! Replays board interaction scripts in the terminal.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin numelace-replay -- board.txt --script events.txt
//! ```
//!
//! Read the script from standard input and print only the final board:
//!
//! ```sh
//! printf 'enter 0 0\nclick 0 0\n' | cargo run --bin numelace-replay -- board.txt --final-only
//! ```

use std::{
    io::{self, Read as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use numelace_highlight_replay::{ReplayError, ReplayOptions, read_file, replay};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board file: 9 rows of 9 cells, `.`, `_` or `0` for empty editable cells.
    #[arg(value_name = "BOARD")]
    board: PathBuf,

    /// Event script. Read from standard input when omitted.
    #[arg(short, long, value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Print the board only after the last event.
    #[arg(long)]
    final_only: bool,

    /// Do not re-evaluate digit matches when an input changes.
    #[arg(long)]
    no_input_tracking: bool,
}

fn run(args: &Args) -> Result<(), ReplayError> {
    let board = read_file(&args.board)?;
    let script = match &args.script {
        Some(path) => read_file(path)?,
        None => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .map_err(|source| ReplayError::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            script
        }
    };

    let options = ReplayOptions {
        every_step: !args.final_only,
        track_input_changes: !args.no_input_tracking,
    };
    replay(&board, &script, options, &mut io::stdout().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
