//! Reading cell structure out of rendered markup.
//!
//! Kept free of DOM types so the reading rules can be tested natively.

use numelace_highlight::{CellContent, HouseKeys};

use crate::HighlightConfig;

/// Builds a cell's house keys from its attributes.
pub(crate) fn house_keys<F>(config: &HighlightConfig, mut attribute: F) -> HouseKeys
where
    F: FnMut(&str) -> Option<String>,
{
    HouseKeys {
        row: attribute(&config.row_attribute),
        column: attribute(&config.column_attribute),
        block: attribute(&config.block_attribute),
    }
}

/// Classifies a cell's content.
///
/// `input_value` is the value of the cell's editable input, if it has one; it
/// takes precedence over the text content.
pub(crate) fn cell_content(input_value: Option<String>, text_content: Option<String>) -> CellContent {
    match input_value {
        Some(value) => CellContent::Input(value),
        None => CellContent::Text(text_content.unwrap_or_default()),
    }
}
