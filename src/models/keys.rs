//! Keystroke identifiers

/// Identifier for a single keystroke delivered to the handler
///
/// Printable bytes are represented by themselves via [`KeyId::Char`]; each
/// inbound byte is one keystroke (no multi-byte decoding at this layer).
/// Control keys are symbolic variants. Equality is by value, so decoded
/// events can be matched directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyId {
    /// A literal character (one per inbound byte)
    Char(char),

    UpArrow,
    DownArrow,
    RightArrow,
    LeftArrow,

    Home,
    Insert,
    Delete,
    End,
    PgUp,
    PgDn,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl KeyId {
    /// Whether this keystroke is a printable character rather than a
    /// symbolic control key
    pub fn is_printable(&self) -> bool {
        matches!(self, KeyId::Char(_))
    }
}
