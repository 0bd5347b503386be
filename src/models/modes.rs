//! Terminal mode numbers
//!
//! Mode tokens are opaque to the engine: inbound `h`/`l` sequences pass
//! their tokens through to the handler unvalidated, and the encoder joins
//! whatever mode values the caller supplies. These constants name the
//! ANSI-specified modes so applications do not hard-code magic numbers.

/// Keyboard action mode (KAM)
pub const KEYBOARD_ACTION: u16 = 2;
/// Insertion-replacement mode (IRM)
pub const INSERTION_REPLACEMENT: u16 = 4;
/// Linefeed-newline mode (LNM)
pub const LINEFEED_NEWLINE: u16 = 20;

/// ANSI-compatible private mode numbers (`?`-prefixed set/reset)
///
/// The engine does not implement private-mode sequences; the numbers are
/// provided for handlers that interpret the opaque tokens themselves.
pub mod private {
    pub const CURSOR_KEY: u16 = 1;
    pub const ANSI_VT52: u16 = 2;
    pub const COLUMN: u16 = 3;
    pub const SCROLL: u16 = 4;
    pub const SCREEN: u16 = 5;
    pub const ORIGIN: u16 = 6;
    pub const AUTO_WRAP: u16 = 7;
    pub const AUTO_REPEAT: u16 = 8;
    pub const PRINTER_FORM_FEED: u16 = 18;
    pub const PRINTER_EXTENT: u16 = 19;
}
