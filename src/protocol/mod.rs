//! Terminal protocol engine
//!
//! One [`ServerTerminal`] per connection ties the pieces together:
//!
//! - **demultiplexer**: `data_received` separates printable keystrokes from
//!   escape sequences, carrying partial sequences across deliveries
//! - **parser**: complete sequences become semantic events ([`parser`])
//! - **encoder**: semantic commands become byte-exact writes ([`encoder`])
//! - **reports**: cursor-position queries correlate with their asynchronous
//!   replies in FIFO order ([`reports`])
//!
//! The engine owns the transport; the handler is passed into each inbound
//! call so event callbacks can respond through the encoder surface without
//! ownership cycles.

pub mod encoder;
pub mod parser;
pub mod reports;

pub use parser::SequenceEvent;
pub use reports::CursorReport;

use std::fmt::Display;

use crate::error::Result;
use crate::handler::TerminalHandler;
use crate::models::{Attribute, CharacterSet, CharsetSlot, CursorPosition, KeyId};
use crate::transport::Transport;

/// While accumulating, any ASCII letter or `~` ends the sequence. Everything
/// else, a second escape introducer included, is body.
fn is_sequence_terminator(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'~'
}

/// Per-connection protocol engine
///
/// Created at connection handshake, destroyed at teardown. All state is
/// owned exclusively by this instance and mutated only by the single logical
/// thread driving the connection's I/O; nothing is shared across
/// connections.
pub struct ServerTerminal {
    transport: Box<dyn Transport>,
    /// Bytes accumulated since the last unmatched escape introducer; empty
    /// between sequences, persists across delivery boundaries
    escape_buf: Vec<u8>,
    reports: reports::CursorReportQueue,
    /// Most recent outbound write, retained for observability and tests
    last_write: Vec<u8>,
}

impl ServerTerminal {
    /// Create an engine for one connection
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            escape_buf: Vec::new(),
            reports: reports::CursorReportQueue::default(),
            last_write: Vec::new(),
        }
    }

    /// Announce the established connection to the handler
    pub fn connection_made(&mut self, handler: &mut dyn TerminalHandler) {
        debug!("connection established");
        handler.connection_made(self);
    }

    /// Feed one inbound delivery through the demultiplexer
    ///
    /// Plain bytes become keystroke events immediately, one event per byte,
    /// in order. A complete escape sequence is parsed and dispatched; an
    /// incomplete one is buffered and waits indefinitely for more bytes or
    /// teardown - there is no flush timeout.
    pub fn data_received(&mut self, handler: &mut dyn TerminalHandler, data: &[u8]) {
        trace!(len = data.len(), "inbound delivery");
        let mut escape_buf = std::mem::take(&mut self.escape_buf);
        for &byte in data {
            if !escape_buf.is_empty() {
                if is_sequence_terminator(byte) {
                    self.dispatch_control_sequence(handler, &escape_buf, byte);
                    escape_buf.clear();
                } else {
                    escape_buf.push(byte);
                }
            } else if byte == encoder::ESC {
                escape_buf.push(byte);
            } else {
                handler.keystroke_received(self, KeyId::Char(byte as char));
            }
        }
        self.escape_buf = escape_buf;
    }

    fn dispatch_control_sequence(
        &mut self,
        handler: &mut dyn TerminalHandler,
        body: &[u8],
        terminator: u8,
    ) {
        match parser::parse(body, terminator) {
            SequenceEvent::SetMode(modes) => handler.set_mode(self, modes),
            SequenceEvent::ResetMode(modes) => handler.reset_mode(self, modes),
            SequenceEvent::SelectScrollRegion(top, bottom) => {
                handler.select_scroll_region(self, top, bottom)
            }
            SequenceEvent::Keystroke(key) => handler.keystroke_received(self, key),
            SequenceEvent::CursorReport { line, column } => {
                let position = CursorPosition {
                    column: column - 1,
                    row: line - 1,
                };
                if !self.reports.resolve_next(position) {
                    // A report nobody asked for is indistinguishable from
                    // any other uninterpreted sequence.
                    let raw = parser::raw_text(body, terminator);
                    debug!(sequence = %raw, "cursor report with no pending query");
                    handler.unhandled_control_sequence(self, &raw);
                }
            }
            SequenceEvent::Unhandled(raw) => {
                debug!(sequence = %raw, "unhandled control sequence");
                handler.unhandled_control_sequence(self, &raw);
            }
        }
    }

    /// Tear down connection state and notify the handler
    ///
    /// Outstanding cursor-report futures resolve with
    /// [`crate::Error::ReportAborted`]. The pending escape buffer is
    /// discarded.
    pub fn connection_lost(&mut self, handler: &mut dyn TerminalHandler, reason: &str) {
        debug!(reason, "connection lost");
        self.escape_buf.clear();
        self.reports.abort_all();
        handler.connection_lost(reason);
    }

    /// Write raw bytes to the peer
    ///
    /// Every encoded command goes through here as a single transport call;
    /// applications use it directly for printable output.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        trace!(len = bytes.len(), "outbound write");
        self.last_write.clear();
        self.last_write.extend_from_slice(bytes);
        self.transport.write(bytes)
    }

    /// The most recent outbound write
    pub fn last_write(&self) -> &[u8] {
        &self.last_write
    }

    /// Number of unanswered cursor-position queries
    pub fn pending_reports(&self) -> usize {
        self.reports.len()
    }

    /// Reset the terminal, then close the transport
    ///
    /// The reset is written first so the peer observes a clean terminal
    /// state before the disconnect.
    pub fn lose_connection(&mut self) -> Result<()> {
        self.reset()?;
        self.transport.lose_connection()
    }

    // Command encoder surface. Counts default to 1 at the caller's
    // discretion; coordinates are zero-based here, 1-based on the wire.

    /// Move the cursor up `n` lines
    pub fn cursor_up(&mut self, n: u16) -> Result<()> {
        self.write(&encoder::cursor_up(n))
    }

    /// Move the cursor down `n` lines
    pub fn cursor_down(&mut self, n: u16) -> Result<()> {
        self.write(&encoder::cursor_down(n))
    }

    /// Move the cursor right `n` columns
    pub fn cursor_forward(&mut self, n: u16) -> Result<()> {
        self.write(&encoder::cursor_forward(n))
    }

    /// Move the cursor left `n` columns
    pub fn cursor_backward(&mut self, n: u16) -> Result<()> {
        self.write(&encoder::cursor_backward(n))
    }

    /// Move the cursor to the given zero-based column and row
    pub fn cursor_position(&mut self, column: u16, row: u16) -> Result<()> {
        self.write(&encoder::cursor_position(column, row))
    }

    /// Move the cursor home
    pub fn cursor_home(&mut self) -> Result<()> {
        self.write(&encoder::cursor_home())
    }

    /// Move down one line, scrolling if necessary
    pub fn index(&mut self) -> Result<()> {
        self.write(&encoder::index())
    }

    /// Move up one line, scrolling if necessary
    pub fn reverse_index(&mut self) -> Result<()> {
        self.write(&encoder::reverse_index())
    }

    /// Move to the first position on the next line, scrolling if necessary
    pub fn next_line(&mut self) -> Result<()> {
        self.write(&encoder::next_line())
    }

    /// Save cursor position, attribute, character set, and origin mode
    pub fn save_cursor(&mut self) -> Result<()> {
        self.write(&encoder::save_cursor())
    }

    /// Restore the previously saved cursor state
    pub fn restore_cursor(&mut self) -> Result<()> {
        self.write(&encoder::restore_cursor())
    }

    /// Set the given modes; values are opaque tokens
    pub fn set_mode<M: Display>(&mut self, modes: &[M]) -> Result<()> {
        self.write(&encoder::set_mode(modes))
    }

    /// Reset the given modes
    pub fn reset_mode<M: Display>(&mut self, modes: &[M]) -> Result<()> {
        self.write(&encoder::reset_mode(modes))
    }

    /// Make the keypad generate control functions
    pub fn application_keypad_mode(&mut self) -> Result<()> {
        self.write(&encoder::application_keypad_mode())
    }

    /// Make the keypad generate normal characters
    pub fn numeric_keypad_mode(&mut self) -> Result<()> {
        self.write(&encoder::numeric_keypad_mode())
    }

    /// Designate a character set into G0 or G1
    pub fn select_character_set(&mut self, set: CharacterSet, slot: CharsetSlot) -> Result<()> {
        self.write(&encoder::select_character_set(set, slot))
    }

    /// Shift to G2 for a single character
    pub fn single_shift2(&mut self) -> Result<()> {
        self.write(&encoder::single_shift2())
    }

    /// Shift to G3 for a single character
    pub fn single_shift3(&mut self) -> Result<()> {
        self.write(&encoder::single_shift3())
    }

    /// Enable the given character attributes
    pub fn select_graphic_rendition(&mut self, attributes: &[Attribute]) -> Result<()> {
        self.write(&encoder::select_graphic_rendition(attributes))
    }

    /// Set a tab stop at the cursor position
    pub fn horizontal_tabulation_set(&mut self) -> Result<()> {
        self.write(&encoder::horizontal_tabulation_set())
    }

    /// Clear the tab stop at the cursor position
    pub fn tabulation_clear(&mut self) -> Result<()> {
        self.write(&encoder::tabulation_clear())
    }

    /// Clear all tab stops
    pub fn tabulation_clear_all(&mut self) -> Result<()> {
        self.write(&encoder::tabulation_clear_all())
    }

    /// Make the current line the top (`true`) or bottom half of a
    /// double-height, double-width line
    pub fn double_height_line(&mut self, top: bool) -> Result<()> {
        self.write(&encoder::double_height_line(top))
    }

    /// Make the current line single-width, single-height
    pub fn single_width_line(&mut self) -> Result<()> {
        self.write(&encoder::single_width_line())
    }

    /// Make the current line double-width
    pub fn double_width_line(&mut self) -> Result<()> {
        self.write(&encoder::double_width_line())
    }

    /// Erase from the cursor to the end of the line
    pub fn erase_to_line_end(&mut self) -> Result<()> {
        self.write(&encoder::erase_to_line_end())
    }

    /// Erase from the cursor to the beginning of the line
    pub fn erase_to_line_beginning(&mut self) -> Result<()> {
        self.write(&encoder::erase_to_line_beginning())
    }

    /// Erase the entire cursor line
    pub fn erase_line(&mut self) -> Result<()> {
        self.write(&encoder::erase_line())
    }

    /// Erase from the cursor to the end of the display
    pub fn erase_to_display_end(&mut self) -> Result<()> {
        self.write(&encoder::erase_to_display_end())
    }

    /// Erase from the cursor to the beginning of the display
    pub fn erase_to_display_beginning(&mut self) -> Result<()> {
        self.write(&encoder::erase_to_display_beginning())
    }

    /// Erase the entire display
    pub fn erase_display(&mut self) -> Result<()> {
        self.write(&encoder::erase_display())
    }

    /// Delete `n` characters starting at the cursor position
    pub fn delete_character(&mut self, n: u16) -> Result<()> {
        self.write(&encoder::delete_character(n))
    }

    /// Insert `n` lines at the cursor position
    pub fn insert_line(&mut self, n: u16) -> Result<()> {
        self.write(&encoder::insert_line(n))
    }

    /// Delete `n` lines starting at the cursor position
    pub fn delete_line(&mut self, n: u16) -> Result<()> {
        self.write(&encoder::delete_line(n))
    }

    /// Set the scroll region; omitted margins default on the terminal side
    pub fn set_scroll_region(&mut self, first: Option<u16>, last: Option<u16>) -> Result<()> {
        self.write(&encoder::set_scroll_region(first, last))
    }

    /// Reset the scroll region to the full screen
    pub fn reset_scroll_region(&mut self) -> Result<()> {
        self.set_scroll_region(None, None)
    }

    /// Ask the terminal for its cursor position
    ///
    /// Writes the query and returns the report future immediately; it
    /// resolves on a later inbound delivery, in strict FIFO order with any
    /// other outstanding queries. No timeout is applied here - callers
    /// wanting one wrap the future themselves.
    pub fn report_cursor_position(&mut self) -> Result<CursorReport> {
        self.write(encoder::CURSOR_POSITION_QUERY)?;
        Ok(self.reports.enqueue())
    }

    /// Reset the terminal to its initial state
    pub fn reset(&mut self) -> Result<()> {
        self.write(&encoder::reset())
    }
}
