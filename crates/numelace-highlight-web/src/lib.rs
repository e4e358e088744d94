//! Browser binding for the Numelace board highlighter.
//!
//! Loaded as a wasm module by the server-rendered board page. On start it finds
//! the cell elements, attaches a [`numelace_highlight::BoardController`] to
//! them and wires the reset control. Pages whose markup differs from the
//! defaults in [`HighlightConfig`] call `startWithConfig` with their own names.

pub use self::{
    config::{HighlightClasses, HighlightConfig},
    error::AttachError,
};

pub mod config;
mod error;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod markup;
pub mod version;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;

    use wasm_bindgen::{JsCast as _, JsValue, closure::Closure, prelude::wasm_bindgen};
    use web_sys::Document;

    use crate::{AttachError, HighlightConfig, dom};

    thread_local! {
        static ACTIVE_BOARD: RefCell<Option<dom::BoardHandle>> = const { RefCell::new(None) };
    }

    fn install_panic_hook() {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            previous(panic_info);
            console_error_panic_hook::hook(panic_info);
        }));
    }

    fn document() -> Result<Document, AttachError> {
        web_sys::window()
            .ok_or(AttachError::MissingWindow)?
            .document()
            .ok_or(AttachError::MissingDocument)
    }

    fn is_loading(document: &Document) -> bool {
        document.ready_state() == "loading"
    }

    fn attach_now(document: &Document, config: &HighlightConfig) -> Result<(), AttachError> {
        let handle = dom::attach(document, config)?;
        log::info!("attached to {} cells", handle.cell_count());
        // Replacing the previous handle detaches its listeners.
        ACTIVE_BOARD.with(|active| active.borrow_mut().replace(handle));
        Ok(())
    }

    fn run(config: HighlightConfig) -> Result<(), AttachError> {
        let document = document()?;
        if !is_loading(&document) {
            return attach_now(&document, &config);
        }

        let ready_document = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = attach_now(&ready_document, &config) {
                log::error!("failed to attach board highlighter: {e}");
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .map_err(|_| AttachError::ListenerRegistration {
                event: "DOMContentLoaded",
            })
    }

    #[wasm_bindgen(start)]
    fn start() {
        install_panic_hook();

        // Redirect `log` messages to the browser console.
        console_log::init_with_level(log::Level::Debug).ok();

        log::info!(
            "Starting Numelace board highlighter, version={}",
            crate::version::build_version()
        );

        if let Err(e) = run(HighlightConfig::default()) {
            log::error!("failed to attach board highlighter: {e}");
        }
    }

    /// Re-attaches the highlighter using names from `config`.
    ///
    /// Fields missing from `config` keep their defaults; `undefined` or `null`
    /// uses the default configuration.
    #[wasm_bindgen(js_name = startWithConfig)]
    pub fn start_with_config(config: JsValue) -> Result<(), JsValue> {
        let config = serde_wasm_bindgen::from_value::<Option<HighlightConfig>>(config)
            .map_err(|e| {
                JsValue::from_str(
                    &AttachError::InvalidConfig {
                        message: e.to_string(),
                    }
                    .to_string(),
                )
            })?
            .unwrap_or_default();
        run(config).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Removes all listeners attached by the highlighter.
    #[wasm_bindgen]
    pub fn detach() {
        if ACTIVE_BOARD.with(|active| active.borrow_mut().take()).is_some() {
            log::debug!("detached board highlighter");
        }
    }
}
