//! Text rendering of a board's highlight state.
//!
//! Each cell is printed as its digit (`.` when empty) followed by one marker
//! column per category: `r`ow, `c`olumn, `b`lock and `*` for a digit match,
//! with `-` for an absent category.

use std::fmt::Write as _;

use numelace_highlight::{GRID_SIDE, Highlight, MemoryBoard, Selection};

const MARKERS: [(Highlight, char); 4] = [
    (Highlight::ROW, 'r'),
    (Highlight::COLUMN, 'c'),
    (Highlight::BLOCK, 'b'),
    (Highlight::DIGIT_MATCH, '*'),
];

/// Renders `board` as a 9×9 grid, followed by the selection.
#[must_use]
pub fn render(board: &MemoryBoard, selection: &Selection) -> String {
    let mut out = String::new();
    for (row, cells) in board.cells().chunks(GRID_SIDE).enumerate() {
        if row > 0 && row % 3 == 0 {
            out.push_str(&"-".repeat(GRID_SIDE * 6 + 3));
            out.push('\n');
        }
        for (col, cell) in cells.iter().enumerate() {
            if col > 0 && col % 3 == 0 {
                out.push_str("| ");
            }
            out.push_str(cell.content().digit().unwrap_or("."));
            for (category, marker) in MARKERS {
                out.push(if cell.highlight().contains(category) {
                    marker
                } else {
                    '-'
                });
            }
            out.push(' ');
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }
    let _ = writeln!(out, "selection: {}", selection.digit().unwrap_or("none"));
    out
}

#[cfg(test)]
mod tests {
    use numelace_highlight::BoardController;

    use super::*;

    fn empty_board() -> String {
        "_________\n".repeat(GRID_SIDE)
    }

    #[test]
    fn test_render_marks_categories() {
        let board: MemoryBoard = format!("5{}", &empty_board()[1..]).parse().unwrap();
        let mut controller = BoardController::new(board);
        controller.pointer_enter(0);
        controller.click(0);

        let text = render(controller.surface(), controller.selection());
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 9 + 2 + 1);
        assert!(lines[0].starts_with("5rcb* .r-b- .r-b- | .r--- "));
        assert!(lines[1].starts_with(".-cb- .--b- .--b- | .---- "));
        assert_eq!(lines[3], "-".repeat(lines[0].len()));
        assert_eq!(lines[11], "selection: 5");
    }

    #[test]
    fn test_render_without_selection() {
        let board: MemoryBoard = empty_board().parse().unwrap();
        let text = render(&board, &Selection::Unselected);
        let (grid, selection) = text.rsplit_once("selection: ").unwrap();
        assert_eq!(selection, "none\n");
        assert!(grid.chars().all(|ch| ".-| \n".contains(ch)));
    }
}
