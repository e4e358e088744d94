use std::str::FromStr;

use crate::{BoardSurface, CellContent, Highlight, HouseKeys};

/// One cell of a [`MemoryBoard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCell {
    keys: HouseKeys,
    content: CellContent,
    highlight: Highlight,
}

impl MemoryCell {
    /// Creates an unhighlighted cell.
    #[must_use]
    pub fn new(keys: HouseKeys, content: CellContent) -> Self {
        Self {
            keys,
            content,
            highlight: Highlight::empty(),
        }
    }

    /// Returns the cell's positional keys.
    #[must_use]
    pub fn keys(&self) -> &HouseKeys {
        &self.keys
    }

    /// Returns the cell's content.
    #[must_use]
    pub fn content(&self) -> &CellContent {
        &self.content
    }

    /// Returns the highlight categories currently on the cell.
    #[must_use]
    pub fn highlight(&self) -> Highlight {
        self.highlight
    }
}

/// An in-memory [`BoardSurface`].
///
/// Stands in for a rendered page in command-line tools and tests. Boards of
/// arbitrary shape can be built with [`MemoryBoard::new`]; standard 9×9 boards
/// are usually parsed from text:
///
/// ```
/// use numelace_highlight::{BoardSurface, CellContent, MemoryBoard};
///
/// let board: MemoryBoard = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(board.cell_count(), 81);
/// assert_eq!(board.content(0), CellContent::Text("5".to_owned()));
/// assert_eq!(board.content(2), CellContent::Input(String::new()));
/// assert_eq!(board.house_keys(80).block.as_deref(), Some("8"));
/// ```
///
/// In the text form each non-blank line is one row of nine cells; whitespace
/// inside a line is ignored. `.`, `_` and `0` are empty editable cells; any
/// other character is a given shown as text. Row, column and block keys are
/// derived from the position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryBoard {
    cells: Vec<MemoryCell>,
}

/// Number of rows and columns of a standard board.
pub const GRID_SIDE: usize = 9;

/// Number of cells of a standard board.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// Errors that can occur while parsing a [`MemoryBoard`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A row does not contain exactly 9 cells.
    #[display("line {line}: expected 9 cells, found {found}")]
    RowLength {
        /// 1-based line number of the row.
        line: usize,
        /// Number of cells found on the line.
        found: usize,
    },
    /// The text does not contain exactly 9 rows.
    #[display("expected 9 rows, found {found}")]
    RowCount {
        /// Number of rows found.
        found: usize,
    },
}

impl MemoryBoard {
    /// Creates a board from its cells, in cell order.
    #[must_use]
    pub fn new(cells: Vec<MemoryCell>) -> Self {
        Self { cells }
    }

    /// Returns the index of the cell at `row`, `col` on a standard board.
    #[must_use]
    pub const fn cell_at(row: usize, col: usize) -> usize {
        row * GRID_SIDE + col
    }

    /// Returns the cells of the board.
    #[must_use]
    pub fn cells(&self) -> &[MemoryCell] {
        &self.cells
    }

    /// Returns the highlight categories on `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range.
    #[must_use]
    pub fn highlight(&self, cell: usize) -> Highlight {
        self.cells[cell].highlight
    }

    /// Returns the cells carrying any category in `highlight`, in ascending order.
    #[must_use]
    pub fn cells_with(&self, highlight: Highlight) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.highlight.intersects(highlight))
            .map(|(i, _)| i)
            .collect()
    }

    /// Sets the value of `cell`'s editable input.
    ///
    /// Returns `false` and leaves the board unchanged if the cell is a given or
    /// out of range.
    pub fn set_input(&mut self, cell: usize, value: &str) -> bool {
        match self.cells.get_mut(cell).map(|cell| &mut cell.content) {
            Some(CellContent::Input(current)) => {
                value.clone_into(current);
                true
            }
            _ => false,
        }
    }
}

impl FromStr for MemoryBoard {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::with_capacity(GRID_SIDE);
        for (i, line) in s.lines().enumerate() {
            let row = line.chars().filter(|ch| !ch.is_whitespace()).collect::<Vec<_>>();
            if row.is_empty() {
                continue;
            }
            if row.len() != GRID_SIDE {
                return Err(ParseBoardError::RowLength {
                    line: i + 1,
                    found: row.len(),
                });
            }
            rows.push(row);
        }
        if rows.len() != GRID_SIDE {
            return Err(ParseBoardError::RowCount { found: rows.len() });
        }

        let mut cells = Vec::with_capacity(GRID_CELLS);
        for (row, chars) in rows.into_iter().enumerate() {
            for (col, ch) in chars.into_iter().enumerate() {
                let block = (row / 3) * 3 + col / 3;
                let keys = HouseKeys::new(row.to_string(), col.to_string(), block.to_string());
                let content = match ch {
                    '.' | '_' | '0' => CellContent::Input(String::new()),
                    _ => CellContent::Text(ch.to_string()),
                };
                cells.push(MemoryCell::new(keys, content));
            }
        }
        Ok(Self { cells })
    }
}

impl BoardSurface for MemoryBoard {
    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn house_keys(&self, cell: usize) -> HouseKeys {
        self.cells[cell].keys.clone()
    }

    fn content(&self, cell: usize) -> CellContent {
        self.cells[cell].content.clone()
    }

    fn insert_highlight(&mut self, cell: usize, highlight: Highlight) {
        self.cells[cell].highlight.insert(highlight);
    }

    fn remove_highlight(&mut self, cell: usize, highlight: Highlight) {
        self.cells[cell].highlight.remove(highlight);
    }
}
