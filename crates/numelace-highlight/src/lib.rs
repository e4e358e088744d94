//! Board interaction controller for a rendered Sudoku grid.
//!
//! This crate holds the host-independent part of the Numelace board highlighter:
//! pointer hover marks the row, column and block of the cell under the pointer,
//! and clicking a cell toggles highlighting of every cell showing the same digit.
//!
//! The controller never touches a concrete rendering technology. It drives a
//! [`BoardSurface`], which reports the static structure of the board (house keys
//! and cell contents) and applies [`Highlight`] categories to cells. The web
//! binding implements the surface over DOM elements; [`MemoryBoard`] implements it
//! in memory for tools and tests.
//!
//! # Example
//!
//! ```
//! use numelace_highlight::{BoardController, Highlight, MemoryBoard, Selection};
//!
//! let board: MemoryBoard = "
//!     5__ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ __5
//!     ___ ___ ___
//!     ___ ___ ___
//! "
//! .parse()
//! .unwrap();
//! let mut controller = BoardController::new(board);
//!
//! controller.click(0);
//! assert_eq!(controller.selection(), &Selection::Selected("5".to_owned()));
//! assert_eq!(
//!     controller.surface().cells_with(Highlight::DIGIT_MATCH),
//!     vec![0, 6 * 9 + 8]
//! );
//! ```

pub use self::{cell::*, controller::*, highlight::*, house::*, memory::*, selection::*, surface::*};

mod cell;
mod controller;
mod highlight;
mod house;
mod memory;
mod selection;
mod surface;
pub mod testing;
