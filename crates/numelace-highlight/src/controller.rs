use crate::{BoardSurface, Highlight, HouseIndex, Selection, SelectionChange};

/// A pointer or input event delivered to the controller.
///
/// Each variant names the cell the event happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum BoardEvent {
    /// The pointer entered the cell.
    PointerEnter(usize),
    /// The pointer left the cell.
    PointerLeave(usize),
    /// The cell was clicked.
    Click(usize),
    /// The value of the cell's editable input changed.
    InputChanged(usize),
}

impl BoardEvent {
    /// Returns the cell the event happened on.
    #[must_use]
    pub fn cell(self) -> usize {
        match self {
            Self::PointerEnter(cell)
            | Self::PointerLeave(cell)
            | Self::Click(cell)
            | Self::InputChanged(cell) => cell,
        }
    }
}

/// Wires hover and click behavior to a [`BoardSurface`].
///
/// The controller owns the only piece of interaction state, the [`Selection`],
/// and keeps a [`HouseIndex`] of the board built at construction. Handlers run to
/// completion and leave the surface either fully marked or fully cleared for the
/// categories they touch.
#[derive(Debug)]
pub struct BoardController<S> {
    surface: S,
    index: HouseIndex,
    selection: Selection,
    hovered: Option<usize>,
    track_input_changes: bool,
}

impl<S> BoardController<S>
where
    S: BoardSurface,
{
    /// Creates a controller for `surface`, reading its house keys once.
    #[must_use]
    pub fn new(surface: S) -> Self {
        let keys = (0..surface.cell_count()).map(|cell| surface.house_keys(cell));
        let index = HouseIndex::from_keys(keys);
        Self {
            surface,
            index,
            selection: Selection::Unselected,
            hovered: None,
            track_input_changes: true,
        }
    }

    /// Enables or disables re-evaluation of digit matches on input changes.
    ///
    /// Enabled by default. When disabled, [`BoardEvent::InputChanged`] is ignored
    /// and digit-match highlighting is only recomputed on clicks.
    #[must_use]
    pub fn with_input_tracking(mut self, enabled: bool) -> Self {
        self.track_input_changes = enabled;
        self
    }

    /// Returns the surface the controller drives.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably, e.g. to edit cell contents.
    ///
    /// House keys are not re-read; the board structure is assumed static.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the controller and returns its surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the cell under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Returns the number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.index.cell_count()
    }

    /// Dispatches `event` to the matching handler.
    ///
    /// Returns `false` if the event names a cell outside the board, in which
    /// case nothing changes.
    pub fn handle(&mut self, event: BoardEvent) -> bool {
        if event.cell() >= self.cell_count() {
            log::debug!(
                "ignoring {event:?}: board has {} cells",
                self.cell_count()
            );
            return false;
        }
        match event {
            BoardEvent::PointerEnter(cell) => self.enter(cell),
            BoardEvent::PointerLeave(_) => self.leave(),
            BoardEvent::Click(cell) => self.select(cell),
            BoardEvent::InputChanged(_) => self.refresh_digit_matches(),
        }
        true
    }

    /// Highlights the row, column and block of `cell`.
    ///
    /// Previous hover marking is cleared first. Cells sharing several houses
    /// with `cell` (including `cell` itself) carry every matching category.
    pub fn pointer_enter(&mut self, cell: usize) {
        self.handle(BoardEvent::PointerEnter(cell));
    }

    /// Clears all hover marking.
    pub fn pointer_leave(&mut self, cell: usize) {
        self.handle(BoardEvent::PointerLeave(cell));
    }

    /// Toggles digit-match highlighting for the digit shown by `cell`.
    pub fn click(&mut self, cell: usize) {
        self.handle(BoardEvent::Click(cell));
    }

    /// Re-evaluates digit-match highlighting after `cell`'s input changed.
    pub fn input_changed(&mut self, cell: usize) {
        self.handle(BoardEvent::InputChanged(cell));
    }

    /// Drops the selection and hover state and removes every highlight
    /// category from every cell.
    pub fn reset(&mut self) {
        log::debug!("resetting, was {:?}", self.selection);
        self.selection = Selection::Unselected;
        self.hovered = None;
        self.clear(Highlight::all());
    }

    fn enter(&mut self, cell: usize) {
        self.clear(Highlight::HOUSE);
        self.hovered = Some(cell);
        for house in self.index.houses_of(cell) {
            let highlight = Highlight::for_house(house.kind());
            let members = self.index.members(house);
            log::trace!(
                "marking {} {:?}: {} cells",
                house.kind(),
                house.key(),
                members.len()
            );
            for &member in members {
                self.surface.insert_highlight(member, highlight);
            }
        }
    }

    fn leave(&mut self) {
        self.hovered = None;
        self.clear(Highlight::HOUSE);
    }

    fn select(&mut self, cell: usize) {
        let content = self.surface.content(cell);
        let change = self.selection.click(content.digit());
        log::debug!("click on cell {cell}: {change:?}, now {:?}", self.selection);
        match change {
            SelectionChange::ClearedByEmpty | SelectionChange::ToggledOff => {
                self.clear(Highlight::DIGIT_MATCH);
            }
            SelectionChange::Selected => self.mark_digit_matches(),
        }
    }

    fn refresh_digit_matches(&mut self) {
        if !self.track_input_changes || self.selection.is_unselected() {
            return;
        }
        self.mark_digit_matches();
    }

    fn mark_digit_matches(&mut self) {
        self.clear(Highlight::DIGIT_MATCH);
        let Some(digit) = self.selection.digit() else {
            return;
        };
        for cell in 0..self.index.cell_count() {
            if self.surface.content(cell).shows(digit) {
                self.surface.insert_highlight(cell, Highlight::DIGIT_MATCH);
            }
        }
    }

    fn clear(&mut self, highlight: Highlight) {
        for cell in 0..self.index.cell_count() {
            self.surface.remove_highlight(cell, highlight);
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{CellContent, HouseKeys, HouseKind, MemoryBoard, MemoryCell};

    fn two_fives() -> MemoryBoard {
        "
            5__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ _5_ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ __3
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn test_enter_marks_union_of_houses() {
        let mut controller = BoardController::new(two_fives());
        controller.pointer_enter(0);

        let board = controller.surface();
        for cell in 0..81 {
            let (row, col) = (cell / 9, cell % 9);
            assert_eq!(board.highlight(cell).contains(Highlight::ROW), row == 0);
            assert_eq!(board.highlight(cell).contains(Highlight::COLUMN), col == 0);
            assert_eq!(
                board.highlight(cell).contains(Highlight::BLOCK),
                row < 3 && col < 3
            );
        }
        assert_eq!(board.highlight(0), Highlight::HOUSE);
        assert_eq!(controller.hovered(), Some(0));
    }

    #[test]
    fn test_enter_replaces_previous_hover() {
        let mut controller = BoardController::new(two_fives());
        controller.pointer_enter(0);
        controller.pointer_enter(80);

        let board = controller.surface();
        assert!(board.highlight(0).is_empty());
        assert_eq!(board.highlight(80), Highlight::HOUSE);
        assert_eq!(board.cells_with(Highlight::ROW), (72..81).collect::<Vec<_>>());
    }

    #[test]
    fn test_leave_clears_hover_only() {
        let mut controller = BoardController::new(two_fives());
        controller.click(0);
        controller.pointer_enter(0);
        controller.pointer_leave(0);

        let board = controller.surface();
        assert!(board.cells_with(Highlight::ROW).is_empty());
        assert!(board.cells_with(Highlight::COLUMN).is_empty());
        assert!(board.cells_with(Highlight::BLOCK).is_empty());
        assert_eq!(board.cells_with(Highlight::DIGIT_MATCH), vec![0, 40]);
        assert_eq!(controller.hovered(), None);
    }

    #[test]
    fn test_reset_removes_all_marking() {
        let mut controller = BoardController::new(two_fives());
        controller.click(0);
        controller.pointer_enter(40);
        controller.reset();

        assert!(controller.surface().cells_with(Highlight::all()).is_empty());
        assert!(controller.selection().is_unselected());
        assert_eq!(controller.hovered(), None);

        // A fresh click after reset selects again rather than toggling off.
        controller.click(0);
        assert_eq!(controller.surface().cells_with(Highlight::DIGIT_MATCH), vec![0, 40]);
    }

    #[test]
    fn test_click_toggles_digit_match() {
        let mut controller = BoardController::new(two_fives());

        controller.click(0);
        assert_eq!(controller.surface().cells_with(Highlight::DIGIT_MATCH), vec![0, 40]);

        controller.click(0);
        assert!(controller.surface().cells_with(Highlight::DIGIT_MATCH).is_empty());
        assert!(controller.selection().is_unselected());

        controller.click(40);
        assert_eq!(controller.surface().cells_with(Highlight::DIGIT_MATCH), vec![0, 40]);
        assert_eq!(controller.selection().digit(), Some("5"));
    }

    #[test]
    fn test_click_other_digit_moves_selection() {
        let mut controller = BoardController::new(two_fives());
        controller.click(0);
        controller.click(80);

        assert_eq!(controller.surface().cells_with(Highlight::DIGIT_MATCH), vec![80]);
        assert_eq!(controller.selection().digit(), Some("3"));
    }

    #[test]
    fn test_click_empty_clears() {
        let mut controller = BoardController::new(two_fives());
        controller.click(0);
        controller.click(1);

        assert!(controller.surface().cells_with(Highlight::DIGIT_MATCH).is_empty());
        assert!(controller.selection().is_unselected());
    }

    #[test]
    fn test_input_change_reevaluates_selection() {
        let mut controller = BoardController::new(two_fives());
        controller.click(0);

        assert!(controller.surface_mut().set_input(2, " 5 "));
        controller.input_changed(2);
        assert_eq!(
            controller.surface().cells_with(Highlight::DIGIT_MATCH),
            vec![0, 2, 40]
        );
        assert_eq!(controller.selection().digit(), Some("5"));

        assert!(controller.surface_mut().set_input(2, ""));
        controller.input_changed(2);
        assert_eq!(controller.surface().cells_with(Highlight::DIGIT_MATCH), vec![0, 40]);
    }

    #[test]
    fn test_input_change_without_selection_is_noop() {
        let mut controller = BoardController::new(two_fives());
        assert!(controller.surface_mut().set_input(2, "5"));
        controller.input_changed(2);

        assert!(controller.surface().cells_with(Highlight::DIGIT_MATCH).is_empty());
        assert!(controller.selection().is_unselected());
    }

    #[test]
    fn test_input_tracking_can_be_disabled() {
        let mut controller = BoardController::new(two_fives()).with_input_tracking(false);
        controller.click(0);
        assert!(controller.surface_mut().set_input(2, "5"));
        controller.input_changed(2);

        assert_eq!(controller.surface().cells_with(Highlight::DIGIT_MATCH), vec![0, 40]);
    }

    #[test]
    fn test_selected_input_cell_matches_typed_digit() {
        let mut controller = BoardController::new(two_fives());
        assert!(controller.surface_mut().set_input(1, "5"));
        controller.click(1);

        assert_eq!(
            controller.surface().cells_with(Highlight::DIGIT_MATCH),
            vec![0, 1, 40]
        );
    }

    #[test]
    fn test_out_of_range_events_are_ignored() {
        let mut controller = BoardController::new(two_fives());
        controller.click(0);
        controller.pointer_enter(0);

        assert!(!controller.handle(BoardEvent::PointerEnter(81)));
        assert!(!controller.handle(BoardEvent::PointerLeave(81)));
        assert!(!controller.handle(BoardEvent::Click(81)));
        assert!(!controller.handle(BoardEvent::InputChanged(81)));

        assert_eq!(controller.selection().digit(), Some("5"));
        assert_eq!(controller.surface().highlight(0), Highlight::all());
    }

    #[test]
    fn test_missing_attributes_under_apply() {
        let cells = vec![
            MemoryCell::new(HouseKeys::new("0", "0", "0"), CellContent::Text("1".to_owned())),
            MemoryCell::new(
                HouseKeys {
                    column: None,
                    ..HouseKeys::new("0", "1", "0")
                },
                CellContent::default(),
            ),
            MemoryCell::new(HouseKeys::default(), CellContent::default()),
            MemoryCell::new(HouseKeys::default(), CellContent::default()),
        ];
        let mut controller = BoardController::new(MemoryBoard::new(cells));

        controller.pointer_enter(1);
        let board = controller.surface();
        assert_eq!(board.cells_with(Highlight::ROW), vec![0, 1]);
        assert!(board.cells_with(Highlight::COLUMN).is_empty());
        assert_eq!(board.cells_with(Highlight::BLOCK), vec![0, 1]);

        controller.pointer_enter(2);
        assert!(controller.surface().cells_with(Highlight::HOUSE).is_empty());
    }

    fn arb_key() -> impl Strategy<Value = Option<String>> {
        prop::option::weighted(0.9, prop::sample::select(vec!["0", "1", "2", "10"]))
            .prop_map(|key| key.map(str::to_owned))
    }

    fn arb_content() -> impl Strategy<Value = CellContent> {
        let value = prop::sample::select(vec!["", " ", "1", "2", " 2", "3\n", "12"]);
        (any::<bool>(), value).prop_map(|(input, value)| {
            if input {
                CellContent::Input(value.to_owned())
            } else {
                CellContent::Text(value.to_owned())
            }
        })
    }

    fn arb_board() -> impl Strategy<Value = MemoryBoard> {
        let cell = (arb_key(), arb_key(), arb_key(), arb_content()).prop_map(
            |(row, column, block, content)| {
                MemoryCell::new(HouseKeys { row, column, block }, content)
            },
        );
        prop::collection::vec(cell, 1..40).prop_map(MemoryBoard::new)
    }

    proptest! {
        #[test]
        fn prop_enter_marks_exactly_shared_houses(board in arb_board(), pick in any::<prop::sample::Index>()) {
            let hovered = pick.index(board.cell_count());
            let keys = (0..board.cell_count()).map(|cell| board.house_keys(cell)).collect::<Vec<_>>();
            let mut controller = BoardController::new(board);
            controller.pointer_enter(hovered);

            for (cell, cell_keys) in keys.iter().enumerate() {
                let highlight = controller.surface().highlight(cell);
                for kind in HouseKind::ALL {
                    prop_assert_eq!(
                        highlight.contains(Highlight::for_house(kind)),
                        keys[hovered].shares(cell_keys, kind)
                    );
                }
            }

            controller.pointer_leave(hovered);
            prop_assert!(controller.surface().cells_with(Highlight::HOUSE).is_empty());
        }

        #[test]
        fn prop_click_twice_toggles(board in arb_board(), pick in any::<prop::sample::Index>()) {
            let clicked = pick.index(board.cell_count());
            let content = board.content(clicked);
            let expected = (0..board.cell_count())
                .filter(|&cell| content.digit().is_some_and(|digit| board.content(cell).shows(digit)))
                .collect::<Vec<_>>();
            let mut controller = BoardController::new(board);

            controller.click(clicked);
            prop_assert_eq!(controller.surface().cells_with(Highlight::DIGIT_MATCH), expected);
            prop_assert_eq!(controller.selection().digit(), content.digit());

            controller.click(clicked);
            prop_assert!(controller.surface().cells_with(Highlight::DIGIT_MATCH).is_empty());
            prop_assert!(controller.selection().is_unselected());
        }

        #[test]
        fn prop_second_digit_replaces_first(board in arb_board(), first in any::<prop::sample::Index>(), second in any::<prop::sample::Index>()) {
            let first = first.index(board.cell_count());
            let second = second.index(board.cell_count());
            let first_digit = board.content(first).digit().map(str::to_owned);
            let second_content = board.content(second);
            prop_assume!(first_digit.is_some() && second_content.digit().is_some());
            prop_assume!(first_digit.as_deref() != second_content.digit());

            let expected = (0..board.cell_count())
                .filter(|&cell| second_content.digit().is_some_and(|digit| board.content(cell).shows(digit)))
                .collect::<Vec<_>>();
            let mut controller = BoardController::new(board);
            controller.click(first);
            controller.click(second);

            prop_assert_eq!(controller.surface().cells_with(Highlight::DIGIT_MATCH), expected);
        }

        #[test]
        fn prop_empty_click_always_clears(board in arb_board(), clicks in prop::collection::vec(any::<prop::sample::Index>(), 0..6)) {
            let empty = (0..board.cell_count()).find(|&cell| board.content(cell).digit().is_none());
            prop_assume!(empty.is_some());
            let cell_count = board.cell_count();
            let mut controller = BoardController::new(board);
            for click in clicks {
                controller.click(click.index(cell_count));
            }

            controller.click(empty.unwrap());
            prop_assert!(controller.surface().cells_with(Highlight::DIGIT_MATCH).is_empty());
            prop_assert!(controller.selection().is_unselected());
        }
    }
}
