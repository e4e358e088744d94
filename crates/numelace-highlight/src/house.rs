use std::collections::HashMap;

/// The three kinds of Sudoku house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HouseKind {
    /// A horizontal line of cells.
    #[display("row")]
    Row,
    /// A vertical line of cells.
    #[display("column")]
    Column,
    /// A 3×3 sub-grid.
    #[display("block")]
    Block,
}

impl HouseKind {
    /// All house kinds in row, column, block order.
    pub const ALL: [Self; 3] = [Self::Row, Self::Column, Self::Block];
}

/// A house identified by its kind and the key cells carry for it.
///
/// Keys are opaque strings taken from the rendered board (`"0"` to `"8"` on a
/// standard grid) and compare exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct House {
    kind: HouseKind,
    key: String,
}

impl House {
    /// Creates a house from its kind and key.
    #[must_use]
    pub fn new(kind: HouseKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }

    /// Returns the kind of this house.
    #[must_use]
    pub fn kind(&self) -> HouseKind {
        self.kind
    }

    /// Returns the key identifying this house among houses of its kind.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Positional keys of a single cell.
///
/// A missing key means the cell does not belong to any house of that kind; it
/// never matches another cell, not even one that is also missing the key.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct HouseKeys {
    /// Row key.
    pub row: Option<String>,
    /// Column key.
    pub column: Option<String>,
    /// Block key.
    pub block: Option<String>,
}

impl HouseKeys {
    /// Creates keys for a cell that belongs to all three houses.
    #[must_use]
    pub fn new(row: impl Into<String>, column: impl Into<String>, block: impl Into<String>) -> Self {
        Self {
            row: Some(row.into()),
            column: Some(column.into()),
            block: Some(block.into()),
        }
    }

    /// Returns the key for `kind`, if present.
    #[must_use]
    pub fn get(&self, kind: HouseKind) -> Option<&str> {
        match kind {
            HouseKind::Row => self.row.as_deref(),
            HouseKind::Column => self.column.as_deref(),
            HouseKind::Block => self.block.as_deref(),
        }
    }

    /// Returns the houses this cell belongs to.
    pub fn houses(&self) -> impl Iterator<Item = House> + '_ {
        HouseKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|key| House::new(kind, key)))
    }

    /// Returns `true` if both cells carry the same key for `kind`.
    #[must_use]
    pub fn shares(&self, other: &Self, kind: HouseKind) -> bool {
        match (self.get(kind), other.get(kind)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Lookup from houses to their member cells.
///
/// House membership is fixed for the lifetime of a rendered board, so the index
/// is built once and hover marking reads member lists instead of comparing keys
/// of every cell on every pointer event.
#[derive(Debug, Default, Clone)]
pub struct HouseIndex {
    members: HashMap<House, Vec<usize>>,
    houses_of: Vec<Vec<House>>,
}

impl HouseIndex {
    /// Builds the index from per-cell keys, in cell order.
    #[must_use]
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = HouseKeys>,
    {
        let mut members: HashMap<House, Vec<usize>> = HashMap::new();
        let mut houses_of = Vec::new();
        for (cell, keys) in keys.into_iter().enumerate() {
            let houses = keys.houses().collect::<Vec<_>>();
            for house in &houses {
                members.entry(house.clone()).or_default().push(cell);
            }
            houses_of.push(houses);
        }
        Self { members, houses_of }
    }

    /// Returns the number of indexed cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.houses_of.len()
    }

    /// Returns the houses `cell` belongs to, or an empty slice for unknown cells.
    #[must_use]
    pub fn houses_of(&self, cell: usize) -> &[House] {
        self.houses_of.get(cell).map_or(&[], Vec::as_slice)
    }

    /// Returns the cells belonging to `house`, in ascending order.
    #[must_use]
    pub fn members(&self, house: &House) -> &[usize] {
        self.members.get(house).map_or(&[], Vec::as_slice)
    }
}
