//! Test utilities for board interaction.
//!
//! This module provides [`BoardTester`], a harness that drives a
//! [`BoardController`] over a [`MemoryBoard`] and checks the resulting
//! highlight state.
//!
//! # Example
//!
//! ```
//! use numelace_highlight::{Highlight, testing::BoardTester};
//!
//! BoardTester::from_str("
//!     5__ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ _5_ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//! ")
//! .click((0, 0))
//! .assert_selected(Some("5"))
//! .assert_marked(Highlight::DIGIT_MATCH, [(0, 0), (4, 4)])
//! .click((0, 0))
//! .assert_selected(None)
//! .assert_marked(Highlight::DIGIT_MATCH, []);
//! ```

use crate::{BoardController, BoardEvent, Highlight, MemoryBoard};

/// A position on a standard board, as `(row, col)`.
pub type Cell = (usize, usize);

/// A test harness for board interaction.
///
/// # Method Chaining
///
/// All methods take and return `self`, so a scenario reads as one chain of
/// events and assertions.
///
/// # Panics
///
/// Assertion methods panic with a description of the mismatch, using
/// `#[track_caller]` to report the caller's location.
#[derive(Debug)]
pub struct BoardTester {
    controller: BoardController<MemoryBoard>,
}

impl BoardTester {
    /// Creates a tester from a board.
    pub fn new(board: MemoryBoard) -> Self {
        Self {
            controller: BoardController::new(board),
        }
    }

    /// Creates a tester from the text form of a standard board.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid board.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        match s.parse() {
            Ok(board) => Self::new(board),
            Err(e) => panic!("invalid board: {e}"),
        }
    }

    /// Returns the underlying controller.
    #[must_use]
    pub fn controller(&self) -> &BoardController<MemoryBoard> {
        &self.controller
    }

    /// Delivers a raw event.
    pub fn event(mut self, event: BoardEvent) -> Self {
        self.controller.handle(event);
        self
    }

    /// Moves the pointer onto `cell`.
    pub fn enter(self, cell: Cell) -> Self {
        self.event(BoardEvent::PointerEnter(index(cell)))
    }

    /// Moves the pointer off `cell`.
    pub fn leave(self, cell: Cell) -> Self {
        self.event(BoardEvent::PointerLeave(index(cell)))
    }

    /// Clicks `cell`.
    pub fn click(self, cell: Cell) -> Self {
        self.event(BoardEvent::Click(index(cell)))
    }

    /// Types `value` into the input of `cell` and reports the change.
    ///
    /// # Panics
    ///
    /// Panics if `cell` has no editable input.
    #[track_caller]
    pub fn type_into(mut self, cell: Cell, value: &str) -> Self {
        assert!(
            self.controller.surface_mut().set_input(index(cell), value),
            "cell {cell:?} has no editable input"
        );
        self.event(BoardEvent::InputChanged(index(cell)))
    }

    /// Asserts the current selection.
    ///
    /// # Panics
    ///
    /// Panics if the selected digit differs from `expected`.
    #[track_caller]
    pub fn assert_selected(self, expected: Option<&str>) -> Self {
        let actual = self.controller.selection().digit();
        assert_eq!(actual, expected, "unexpected selection");
        self
    }

    /// Asserts that exactly `expected` cells carry any category in `highlight`.
    ///
    /// Cells are compared as a set.
    ///
    /// # Panics
    ///
    /// Panics if the marked cells differ from `expected`.
    #[track_caller]
    pub fn assert_marked<I>(self, highlight: Highlight, expected: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut expected = expected.into_iter().map(index).collect::<Vec<_>>();
        expected.sort_unstable();
        expected.dedup();
        let actual = self.controller.surface().cells_with(highlight);
        assert_eq!(
            actual.iter().map(|&i| position(i)).collect::<Vec<_>>(),
            expected.iter().map(|&i| position(i)).collect::<Vec<_>>(),
            "cells marked with {highlight:?} differ"
        );
        self
    }

    /// Asserts the full set of categories on `cell`.
    ///
    /// # Panics
    ///
    /// Panics if the categories differ from `expected`.
    #[track_caller]
    pub fn assert_cell(self, cell: Cell, expected: Highlight) -> Self {
        let actual = self.controller.surface().highlight(index(cell));
        assert_eq!(actual, expected, "highlight of cell {cell:?}");
        self
    }
}

fn index((row, col): Cell) -> usize {
    MemoryBoard::cell_at(row, col)
}

fn position(index: usize) -> Cell {
    (index / crate::GRID_SIDE, index % crate::GRID_SIDE)
}
