//! termwire - A server-side terminal-control protocol engine
//!
//! This library sits between a raw bidirectional byte transport and an
//! application-level handler inside an interactive console server. It turns
//! inbound bytes into semantic events and outbound terminal commands into
//! exact escape byte sequences.
//!
//! ## Features
//!
//! - **Byte Demultiplexing:** Separates printable keystrokes from escape
//!   sequences, reassembling sequences split across transport deliveries
//! - **Control Sequence Parsing:** Terminator-dispatched grammars for modes,
//!   arrows, editing keys, scroll regions, and cursor-position reports
//! - **Command Encoding:** Byte-exact VT100/ANSI output for cursor movement,
//!   erase, modes, character sets, and graphic rendition
//! - **Cursor Report Correlation:** FIFO futures pairing in-order queries
//!   with out-of-band terminal replies, without blocking
//!
//! ## Module Organization
//!
//! - [`protocol`] - The engine: per-connection session, parser, encoder,
//!   pending-report queue
//! - [`handler`] - The [`TerminalHandler`] trait implemented by applications
//! - [`transport`] - The [`Transport`] trait implemented by connection owners
//! - [`models`] - Data structures (key identifiers, character sets,
//!   rendition attributes, mode constants)
//! - [`mod@error`] - Error types and Result alias
//!
//! ## Quick Start
//!
//! ```no_run
//! use termwire::{ServerTerminal, TerminalHandler, KeyId};
//!
//! struct Echo;
//!
//! impl TerminalHandler for Echo {
//!     fn keystroke_received(&mut self, terminal: &mut ServerTerminal, key: KeyId) {
//!         if let KeyId::Char(ch) = key {
//!             let _ = terminal.write(&[ch as u8]);
//!         }
//!     }
//! }
//!
//! # fn feed(terminal: &mut ServerTerminal, handler: &mut Echo, bytes: &[u8]) {
//! // The connection owner feeds every inbound delivery to the engine:
//! terminal.data_received(handler, bytes);
//! # }
//! ```
//!
//! ## Concurrency Model
//!
//! One engine per connection, driven by a single logical thread: parsing
//! runs synchronously inside [`ServerTerminal::data_received`], encoder
//! writes are synchronous transport calls, and handler callbacks execute
//! inside the parse call chain (and therefore must not block). The only
//! suspending operation is awaiting a [`CursorReport`], which resolves on a
//! later inbound delivery.

#[macro_use]
extern crate tracing;

pub mod error;
pub mod handler;
pub mod models;
pub mod protocol;
pub mod transport;

// Re-exports for core functionality
pub use error::{Error, Result};
pub use handler::TerminalHandler;
pub use protocol::{CursorReport, ServerTerminal};
pub use transport::Transport;

// Convenience re-exports for common types
pub use models::{Attribute, CharacterSet, CharsetSlot, CursorPosition, KeyId};

// Version information
/// The current version of termwire from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
