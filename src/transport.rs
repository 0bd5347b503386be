//! Byte transport abstraction
//!
//! The engine never owns a socket. The connection owner hands it a
//! [`Transport`], and every encoded command becomes exactly one `write`
//! call (no batching). This abstraction allows for:
//!
//! - Easier unit testing with mock implementations
//! - Decoupling of the protocol engine from the network layer
//! - Alternative carriers (telnet, ssh channels, in-process pipes)

use crate::error::Result;

/// Outbound side of a connection
pub trait Transport {
    /// Write raw bytes to the peer
    ///
    /// # Errors
    /// Returns an error if the underlying connection rejects the write. The
    /// engine performs no retry; policy belongs to the owner.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Close the connection
    ///
    /// Called by `ServerTerminal::lose_connection` after the terminal-reset
    /// sequence has been written, so the peer observes a clean terminal
    /// state before the disconnect.
    fn lose_connection(&mut self) -> Result<()>;
}
