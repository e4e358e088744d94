//! DOM binding for the board controller.
//!
//! Cell elements are collected once when attaching. Their positional attributes
//! are read into the controller's house index at that point; contents are read
//! from the live elements on every event so typed digits are seen.
//!
//! Nothing here runs natively. The reading rules live in `markup` and the
//! reset target in [`HighlightConfig::reset_path`], both tested natively; the
//! listener wiring and the `location.href` assignment are not.

use std::{cell::RefCell, rc::Rc};

use numelace_highlight::{
    BoardController, BoardEvent, BoardSurface, CellContent, Highlight, HouseKeys,
};
use wasm_bindgen::{JsCast as _, closure::Closure};
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlInputElement};

use crate::{AttachError, HighlightClasses, HighlightConfig, markup};

/// A [`BoardSurface`] over rendered cell elements.
#[derive(Debug)]
pub struct DomBoard {
    cells: Vec<HtmlElement>,
    keys: Vec<HouseKeys>,
    classes: HighlightClasses,
}

impl DomBoard {
    /// Collects the cells matching the configured selector.
    ///
    /// Matched nodes that are not HTML elements are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AttachError::InvalidSelector`] if the browser rejects the
    /// configured selector.
    pub fn query(document: &Document, config: &HighlightConfig) -> Result<Self, AttachError> {
        let nodes = document
            .query_selector_all(&config.cell_selector)
            .map_err(|_| AttachError::InvalidSelector {
                selector: config.cell_selector.clone(),
            })?;

        let cells = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect::<Vec<_>>();
        let keys = cells
            .iter()
            .map(|cell| markup::house_keys(config, |name| cell.get_attribute(name)))
            .collect();

        Ok(Self {
            cells,
            keys,
            classes: config.classes.clone(),
        })
    }

    fn input(&self, cell: usize) -> Option<HtmlInputElement> {
        self.cells[cell]
            .query_selector("input")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    }
}

impl BoardSurface for DomBoard {
    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn house_keys(&self, cell: usize) -> HouseKeys {
        self.keys[cell].clone()
    }

    fn content(&self, cell: usize) -> CellContent {
        let input_value = self.input(cell).map(|input| input.value());
        markup::cell_content(input_value, self.cells[cell].text_content())
    }

    fn insert_highlight(&mut self, cell: usize, highlight: Highlight) {
        let class_list = self.cells[cell].class_list();
        for name in self.classes.names(highlight) {
            let _ = class_list.add_1(name);
        }
    }

    fn remove_highlight(&mut self, cell: usize, highlight: Highlight) {
        let class_list = self.cells[cell].class_list();
        for name in self.classes.names(highlight) {
            let _ = class_list.remove_1(name);
        }
    }
}

type SharedController = Rc<RefCell<BoardController<DomBoard>>>;

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Listeners attached to a board.
///
/// Dropping the handle removes every listener it registered and every
/// highlight class it left on the cells.
pub struct BoardHandle {
    controller: SharedController,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for BoardHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardHandle")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl BoardHandle {
    /// Returns the number of cells the controller drives.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.controller.borrow().cell_count()
    }

    /// Returns the currently selected digit, if any.
    #[must_use]
    pub fn selected_digit(&self) -> Option<String> {
        self.controller
            .borrow()
            .selection()
            .digit()
            .map(str::to_owned)
    }

    fn listen<F>(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: F,
    ) -> Result<(), AttachError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|_| AttachError::ListenerRegistration { event })?;
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    fn listen_cell(
        &mut self,
        cell: usize,
        event: &'static str,
        board_event: fn(usize) -> BoardEvent,
    ) -> Result<(), AttachError> {
        let target = EventTarget::from(self.controller.borrow().surface().cells[cell].clone());
        let controller = Rc::clone(&self.controller);
        self.listen(&target, event, move |_event: Event| {
            // Events dispatched synchronously from inside a handler find the
            // controller borrowed; they are dropped.
            if let Ok(mut controller) = controller.try_borrow_mut() {
                controller.handle(board_event(cell));
            }
        })
    }
}

impl Drop for BoardHandle {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.reset(),
            Err(_) => log::warn!("board dropped while handling an event, highlights kept"),
        }
    }
}

/// Attaches hover, click and input handling to the cells of `document`.
///
/// The reset control is wired if present; its absence is not an error.
///
/// # Errors
///
/// Returns an error if the cell selector is invalid or a listener cannot be
/// registered. Listeners registered before the failure are removed.
pub fn attach(document: &Document, config: &HighlightConfig) -> Result<BoardHandle, AttachError> {
    let board = DomBoard::query(document, config)?;
    let has_input = (0..board.cell_count())
        .map(|cell| board.input(cell).is_some())
        .collect::<Vec<_>>();
    let controller =
        BoardController::new(board).with_input_tracking(config.track_input_changes);

    let mut handle = BoardHandle {
        controller: Rc::new(RefCell::new(controller)),
        listeners: Vec::new(),
    };

    for (cell, has_input) in has_input.into_iter().enumerate() {
        handle.listen_cell(cell, "mouseenter", BoardEvent::PointerEnter)?;
        handle.listen_cell(cell, "mouseleave", BoardEvent::PointerLeave)?;
        handle.listen_cell(cell, "click", BoardEvent::Click)?;
        if has_input && config.track_input_changes {
            handle.listen_cell(cell, "input", BoardEvent::InputChanged)?;
        }
    }

    match document.get_element_by_id(&config.reset_button_id) {
        Some(button) => {
            let reset_path = config.reset_path.clone();
            handle.listen(&button, "click", move |_event: Event| navigate(&reset_path))?;
        }
        None => log::debug!("no #{} element, reset disabled", config.reset_button_id),
    }

    Ok(handle)
}

fn navigate(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(path).is_err() {
        log::warn!("failed to navigate to {path}");
    }
}
