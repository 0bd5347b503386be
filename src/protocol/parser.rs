//! Control sequence parser
//!
//! Pure translation of a complete accumulated sequence (introducer through
//! terminator) into a semantic event. Dispatch is by terminator byte; each
//! grammar validates its own structure, and any mismatch folds into
//! [`SequenceEvent::Unhandled`] with the raw text. Nothing here panics and
//! nothing returns an error: malformed input is an event, not a failure.

use crate::models::KeyId;

/// The two-byte control sequence introducer `ESC [`
pub const CSI: &[u8] = b"\x1b[";

/// Semantic result of parsing one complete control sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceEvent {
    /// `CSI <tokens> h` - set the listed modes
    SetMode(Vec<String>),
    /// `CSI <tokens> l` - reset the listed modes
    ResetMode(Vec<String>),
    /// `CSI top;bottom r` - select a scroll region
    SelectScrollRegion(u16, u16),
    /// An arrow or editing key
    Keystroke(KeyId),
    /// `CSI line;column R` - a cursor-position report (1-based, as on the
    /// wire; the engine converts before resolving the pending query)
    CursorReport { line: u16, column: u16 },
    /// Anything the dispatch table does not interpret
    Unhandled(String),
}

/// Parse one complete sequence
///
/// `body` is everything accumulated since the introducer, introducer
/// included; `terminator` is the final byte that ended accumulation.
pub fn parse(body: &[u8], terminator: u8) -> SequenceEvent {
    match terminator {
        b'h' => match mode_tokens(body) {
            Some(modes) => SequenceEvent::SetMode(modes),
            None => unhandled(body, terminator),
        },
        b'l' => match mode_tokens(body) {
            Some(modes) => SequenceEvent::ResetMode(modes),
            None => unhandled(body, terminator),
        },
        b'r' => match scroll_region(body) {
            Some((top, bottom)) => SequenceEvent::SelectScrollRegion(top, bottom),
            None => unhandled(body, terminator),
        },
        b'A' => arrow(body, terminator, KeyId::UpArrow),
        b'B' => arrow(body, terminator, KeyId::DownArrow),
        b'C' => arrow(body, terminator, KeyId::RightArrow),
        b'D' => arrow(body, terminator, KeyId::LeftArrow),
        b'~' => match editing_key(body) {
            Some(key) => SequenceEvent::Keystroke(key),
            None => unhandled(body, terminator),
        },
        b'R' => match numeric_pair(body) {
            // Zero is out of range for the 1-based report coordinates.
            Some((line, column)) if line >= 1 && column >= 1 => {
                SequenceEvent::CursorReport { line, column }
            }
            _ => unhandled(body, terminator),
        },
        _ => unhandled(body, terminator),
    }
}

/// Raw text of a sequence, introducer through terminator
pub(crate) fn raw_text(body: &[u8], terminator: u8) -> String {
    let mut raw = String::from_utf8_lossy(body).into_owned();
    raw.push(terminator as char);
    raw
}

fn unhandled(body: &[u8], terminator: u8) -> SequenceEvent {
    SequenceEvent::Unhandled(raw_text(body, terminator))
}

/// Strip the CSI introducer, yielding the parameter bytes
fn csi_args(body: &[u8]) -> Option<&[u8]> {
    body.strip_prefix(CSI)
}

/// `;`-joined opaque mode tokens; an empty parameter list is one empty token
fn mode_tokens(body: &[u8]) -> Option<Vec<String>> {
    let args = csi_args(body)?;
    let text = std::str::from_utf8(args).ok()?;
    Some(text.split(';').map(str::to_owned).collect())
}

/// Exactly two `;`-separated integers
fn numeric_pair(body: &[u8]) -> Option<(u16, u16)> {
    let args = csi_args(body)?;
    let text = std::str::from_utf8(args).ok()?;
    let mut parts = text.split(';');
    let first = parts.next()?.parse().ok()?;
    let second = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second))
}

fn scroll_region(body: &[u8]) -> Option<(u16, u16)> {
    numeric_pair(body)
}

/// Arrow keys are a bare CSI with no parameters
fn arrow(body: &[u8], terminator: u8, key: KeyId) -> SequenceEvent {
    if body == CSI {
        SequenceEvent::Keystroke(key)
    } else {
        unhandled(body, terminator)
    }
}

/// `CSI n ~` editing keys, mapped positionally for n in 1..=6
fn editing_key(body: &[u8]) -> Option<KeyId> {
    const MAP: [KeyId; 6] = [
        KeyId::Home,
        KeyId::Insert,
        KeyId::Delete,
        KeyId::End,
        KeyId::PgUp,
        KeyId::PgDn,
    ];
    let args = csi_args(body)?;
    let value: usize = std::str::from_utf8(args).ok()?.parse().ok()?;
    MAP.get(value.checked_sub(1)?).copied()
}
