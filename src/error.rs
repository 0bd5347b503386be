//! Error types and Result alias for termwire

/// Result type alias for termwire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for termwire
///
/// Malformed *inbound* data is never an error: it surfaces to the handler as
/// an `unhandled_control_sequence` event and the connection stays open. The
/// variants here cover the outbound path (transport writes) and the
/// cursor-report futures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying I/O failure from a transport implementation
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport rejected a write or close
    #[error("transport failure: {reason}")]
    Transport {
        /// Description supplied by the transport
        reason: String,
    },

    /// The connection was torn down before a pending cursor report arrived
    #[error("connection closed before the cursor report arrived")]
    ReportAborted,
}
