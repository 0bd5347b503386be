//! Data structures shared by the parser and the encoder
//!
//! Closed enumerations for keys, character sets, and rendition attributes,
//! plus the ANSI mode constant tables. Parser and encoder agree on these
//! types, so a decoded event compares equal to the value an application
//! would construct itself.

pub mod charset;
pub mod keys;
pub mod modes;
pub mod rendition;

pub use charset::{CharacterSet, CharsetSlot};
pub use keys::KeyId;
pub use rendition::Attribute;

/// Zero-based cursor coordinates reported by the terminal
///
/// The wire format is 1-based (`CSI line;column R`); the engine converts to
/// zero-based before resolving a pending report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    /// Zero-based column (x)
    pub column: u16,
    /// Zero-based line (y)
    pub row: u16,
}
