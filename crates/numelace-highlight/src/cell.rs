/// Displayed content of a single cell.
///
/// A rendered cell either wraps an editable input (an empty cell the player can
/// fill) or shows its digit as plain text (a given).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellContent {
    /// The cell contains an editable input holding this value.
    Input(String),
    /// The cell shows this text.
    Text(String),
}

impl CellContent {
    /// Returns the digit shown by the cell, or `None` if the cell is empty.
    ///
    /// The digit is the trimmed input value for editable cells and the trimmed
    /// text otherwise. A value consisting only of whitespace counts as empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use numelace_highlight::CellContent;
    ///
    /// assert_eq!(CellContent::Text(" 7\n".to_owned()).digit(), Some("7"));
    /// assert_eq!(CellContent::Input("  ".to_owned()).digit(), None);
    /// ```
    #[must_use]
    pub fn digit(&self) -> Option<&str> {
        let (Self::Input(raw) | Self::Text(raw)) = self;
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Returns `true` if the cell shows `digit`.
    #[must_use]
    pub fn shows(&self, digit: &str) -> bool {
        self.digit() == Some(digit)
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}
