//! Application handler contract
//!
//! One handler per connection receives every decoded event. All callbacks
//! run synchronously inside the parse call chain and must not block: a slow
//! handler stalls the remainder of the current delivery.

use crate::models::KeyId;
use crate::protocol::ServerTerminal;

/// Event sink for a single terminal connection
///
/// Every method has a default no-op body, so handlers override only what
/// they need. Callbacks receive the engine itself, letting a handler answer
/// through the encoder surface (write a prompt on `connection_made`, echo a
/// keystroke, and so on).
pub trait TerminalHandler {
    /// The connection is established and the engine is ready for commands
    fn connection_made(&mut self, _terminal: &mut ServerTerminal) {}

    /// A keystroke was received
    ///
    /// One invocation per keystroke: printable bytes arrive as
    /// [`KeyId::Char`], control keys as symbolic variants.
    fn keystroke_received(&mut self, _terminal: &mut ServerTerminal, _key: KeyId) {}

    /// The peer reported its window dimensions
    ///
    /// Assume 80x24 if this is never called; not every carrier conveys
    /// window size.
    fn terminal_size(&mut self, _terminal: &mut ServerTerminal, _width: u16, _height: u16) {}

    /// The peer set the given modes
    ///
    /// Tokens are opaque and unvalidated.
    fn set_mode(&mut self, _terminal: &mut ServerTerminal, _modes: Vec<String>) {}

    /// The peer reset the given modes
    fn reset_mode(&mut self, _terminal: &mut ServerTerminal, _modes: Vec<String>) {}

    /// The peer selected a scroll region of `top..=bottom`
    fn select_scroll_region(&mut self, _terminal: &mut ServerTerminal, _top: u16, _bottom: u16) {}

    /// A structurally valid sequence the engine does not interpret, or a
    /// malformed one
    ///
    /// Receives the full raw text, introducer through terminator. The
    /// connection stays open.
    fn unhandled_control_sequence(&mut self, _terminal: &mut ServerTerminal, _sequence: &str) {}

    /// The connection went away
    fn connection_lost(&mut self, _reason: &str) {}
}
