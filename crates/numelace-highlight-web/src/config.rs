//! Page contract configuration.
//!
//! The defaults describe the markup rendered by the Numelace board page. Pages
//! with different markup can pass their own configuration from JavaScript.

use numelace_highlight::Highlight;
use serde::{Deserialize, Serialize};

/// Names the controller uses to find cells and mark them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightConfig {
    /// CSS selector matching every cell element.
    pub cell_selector: String,
    /// Attribute carrying a cell's row key.
    pub row_attribute: String,
    /// Attribute carrying a cell's column key.
    pub column_attribute: String,
    /// Attribute carrying a cell's block key.
    pub block_attribute: String,
    /// CSS classes applied for each highlight category.
    pub classes: HighlightClasses,
    /// Id of the optional reset control.
    pub reset_button_id: String,
    /// Path the reset control navigates to.
    pub reset_path: String,
    /// Re-evaluate digit matches when a cell's input changes.
    pub track_input_changes: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            cell_selector: ".sudoku-cell".to_owned(),
            row_attribute: "data-row".to_owned(),
            column_attribute: "data-col".to_owned(),
            block_attribute: "data-block".to_owned(),
            classes: HighlightClasses::default(),
            reset_button_id: "reset-btn".to_owned(),
            reset_path: "/".to_owned(),
            track_input_changes: true,
        }
    }
}

/// CSS class names for the highlight categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightClasses {
    /// Class for cells in the hovered row.
    pub row: String,
    /// Class for cells in the hovered column.
    pub column: String,
    /// Class for cells in the hovered block.
    pub block: String,
    /// Class for cells showing the selected digit.
    pub digit_match: String,
}

impl Default for HighlightClasses {
    fn default() -> Self {
        Self {
            row: "hl-row".to_owned(),
            column: "hl-col".to_owned(),
            block: "hl-block".to_owned(),
            digit_match: "digit-match".to_owned(),
        }
    }
}

impl HighlightClasses {
    /// Returns the class names for every category in `highlight`.
    pub fn names(&self, highlight: Highlight) -> impl Iterator<Item = &str> {
        [
            (Highlight::ROW, &self.row),
            (Highlight::COLUMN, &self.column),
            (Highlight::BLOCK, &self.block),
            (Highlight::DIGIT_MATCH, &self.digit_match),
        ]
        .into_iter()
        .filter(move |(category, _)| highlight.contains(*category))
        .map(|(_, name)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_board_markup() {
        let config = HighlightConfig::default();
        assert_eq!(config.cell_selector, ".sudoku-cell");
        assert_eq!(config.reset_button_id, "reset-btn");
        assert_eq!(config.reset_path, "/");
        assert!(config.track_input_changes);
        assert_eq!(
            config.classes.names(Highlight::all()).collect::<Vec<_>>(),
            ["hl-row", "hl-col", "hl-block", "digit-match"]
        );
    }

    #[test]
    fn test_names_select_categories() {
        let classes = HighlightClasses::default();
        assert_eq!(
            classes.names(Highlight::HOUSE).collect::<Vec<_>>(),
            ["hl-row", "hl-col", "hl-block"]
        );
        assert_eq!(
            classes
                .names(Highlight::COLUMN | Highlight::DIGIT_MATCH)
                .collect::<Vec<_>>(),
            ["hl-col", "digit-match"]
        );
        assert_eq!(classes.names(Highlight::empty()).count(), 0);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: HighlightConfig = serde_json::from_str(
            r#"{ "resetPath": "/new", "classes": { "digitMatch": "same" } }"#,
        )
        .unwrap();

        assert_eq!(config.reset_path, "/new");
        assert_eq!(config.classes.digit_match, "same");
        assert_eq!(config.classes.row, "hl-row");
        assert_eq!(config.cell_selector, ".sudoku-cell");
    }

    #[test]
    fn test_absent_config_uses_defaults() {
        let config = serde_json::from_str::<Option<HighlightConfig>>("null")
            .unwrap()
            .unwrap_or_default();
        assert_eq!(config.cell_selector, ".sudoku-cell");
        assert_eq!(config.reset_path, "/");
        assert_eq!(config.classes.digit_match, "digit-match");
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let value = serde_json::to_value(HighlightConfig::default()).unwrap();
        assert_eq!(value["resetButtonId"], "reset-btn");
        assert_eq!(value["classes"]["digitMatch"], "digit-match");
        assert_eq!(value["trackInputChanges"], true);
    }
}
