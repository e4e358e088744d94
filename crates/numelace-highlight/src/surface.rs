use crate::{CellContent, Highlight, HouseKeys};

/// A rendered board the controller can read and mark.
///
/// Cells are addressed by their position in the board's cell list
/// (`0..cell_count()`). The controller only calls the per-cell methods with
/// indices inside that range.
pub trait BoardSurface {
    /// Returns the number of cells on the board.
    fn cell_count(&self) -> usize;

    /// Returns the positional keys of `cell`.
    ///
    /// Called once per cell when a controller is created.
    fn house_keys(&self, cell: usize) -> HouseKeys;

    /// Returns the current content of `cell`.
    fn content(&self, cell: usize) -> CellContent;

    /// Adds every category in `highlight` to `cell`.
    fn insert_highlight(&mut self, cell: usize, highlight: Highlight);

    /// Removes every category in `highlight` from `cell`.
    fn remove_highlight(&mut self, cell: usize, highlight: Highlight);
}

impl<S> BoardSurface for &mut S
where
    S: BoardSurface + ?Sized,
{
    fn cell_count(&self) -> usize {
        (**self).cell_count()
    }

    fn house_keys(&self, cell: usize) -> HouseKeys {
        (**self).house_keys(cell)
    }

    fn content(&self, cell: usize) -> CellContent {
        (**self).content(cell)
    }

    fn insert_highlight(&mut self, cell: usize, highlight: Highlight) {
        (**self).insert_highlight(cell, highlight);
    }

    fn remove_highlight(&mut self, cell: usize, highlight: Highlight) {
        (**self).remove_highlight(cell, highlight);
    }
}
