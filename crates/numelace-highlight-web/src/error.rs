/// Errors that can occur while attaching the controller to a page.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AttachError {
    /// No global `window` object is available.
    #[display("no window available")]
    MissingWindow,
    /// The window has no document.
    #[display("no document available")]
    MissingDocument,
    /// The configured cell selector was rejected by the browser.
    #[display("invalid cell selector: {selector:?}")]
    InvalidSelector {
        /// The rejected selector.
        selector: String,
    },
    /// Registering an event listener failed.
    #[display("failed to register {event} listener")]
    ListenerRegistration {
        /// The event type.
        event: &'static str,
    },
    /// The configuration passed from JavaScript could not be read.
    #[display("invalid configuration: {message}")]
    InvalidConfig {
        /// Deserializer error message.
        message: String,
    },
}
