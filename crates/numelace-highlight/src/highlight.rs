use crate::HouseKind;

bitflags::bitflags! {
    /// Highlight categories a cell can carry.
    ///
    /// The categories are independent: a cell in both the hovered row and the
    /// hovered column carries [`Highlight::ROW`] and [`Highlight::COLUMN`] at once,
    /// and may carry [`Highlight::DIGIT_MATCH`] on top of that.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Highlight: u8 {
        /// The cell shares the hovered cell's row.
        const ROW = 0b0000_0001;
        /// The cell shares the hovered cell's column.
        const COLUMN = 0b0000_0010;
        /// The cell shares the hovered cell's block.
        const BLOCK = 0b0000_0100;
        /// The cell shows the selected digit.
        const DIGIT_MATCH = 0b0000_1000;

        /// All hover categories.
        const HOUSE = Self::ROW.bits() | Self::COLUMN.bits() | Self::BLOCK.bits();
    }
}

impl Highlight {
    /// Returns the hover category matching a house kind.
    #[must_use]
    pub const fn for_house(kind: HouseKind) -> Self {
        match kind {
            HouseKind::Row => Self::ROW,
            HouseKind::Column => Self::COLUMN,
            HouseKind::Block => Self::BLOCK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_covers_hover_categories_only() {
        for kind in HouseKind::ALL {
            assert!(Highlight::HOUSE.contains(Highlight::for_house(kind)));
        }
        assert!(!Highlight::HOUSE.intersects(Highlight::DIGIT_MATCH));
        assert_eq!(Highlight::HOUSE | Highlight::DIGIT_MATCH, Highlight::all());
    }
}
