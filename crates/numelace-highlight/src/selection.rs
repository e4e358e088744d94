/// The digit chosen for digit-match highlighting.
///
/// A click on a non-empty cell selects its digit, a second click on the same
/// digit or any click on an empty cell clears the selection, and a click on a
/// different digit moves the selection there.
#[derive(Debug, Default, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Selection {
    /// No digit is selected.
    #[default]
    Unselected,
    /// The given digit is selected.
    Selected(String),
}

/// What a click did to the [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionChange {
    /// The clicked cell was empty; the selection is now cleared.
    ClearedByEmpty,
    /// The clicked cell showed the selected digit; the selection is now cleared.
    ToggledOff,
    /// The clicked cell's digit is now selected.
    Selected,
}

impl Selection {
    /// Returns the selected digit, if any.
    #[must_use]
    pub fn digit(&self) -> Option<&str> {
        match self {
            Self::Unselected => None,
            Self::Selected(digit) => Some(digit),
        }
    }

    /// Applies a click on a cell showing `digit` (`None` for an empty cell).
    ///
    /// # Examples
    ///
    /// ```
    /// use numelace_highlight::{Selection, SelectionChange};
    ///
    /// let mut selection = Selection::default();
    /// assert_eq!(selection.click(Some("4")), SelectionChange::Selected);
    /// assert_eq!(selection.digit(), Some("4"));
    /// assert_eq!(selection.click(Some("4")), SelectionChange::ToggledOff);
    /// assert!(selection.is_unselected());
    /// ```
    pub fn click(&mut self, digit: Option<&str>) -> SelectionChange {
        let Some(digit) = digit else {
            *self = Self::Unselected;
            return SelectionChange::ClearedByEmpty;
        };
        if self.digit() == Some(digit) {
            *self = Self::Unselected;
            SelectionChange::ToggledOff
        } else {
            *self = Self::Selected(digit.to_owned());
            SelectionChange::Selected
        }
    }
}
