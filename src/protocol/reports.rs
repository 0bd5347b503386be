//! Pending cursor-report correlation
//!
//! Cursor-position queries and their replies carry no correlation token;
//! the terminal answers strictly in request order. Each outstanding query
//! is a single-resolution oneshot channel held in a FIFO queue, and each
//! inbound `R` report resolves the oldest entry.
//!
//! No timeout lives at this layer: an unanswered query leaves its future
//! pending until connection teardown. No cancellation either - a dropped
//! [`CursorReport`] still occupies its FIFO slot and absorbs the next reply
//! in order, so callers that race queries against cancellation must add
//! their own policy above this layer.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::error::{Error, Result};
use crate::models::CursorPosition;

/// FIFO of unanswered cursor-position queries
#[derive(Debug, Default)]
pub(crate) struct CursorReportQueue {
    pending: VecDeque<oneshot::Sender<CursorPosition>>,
}

impl CursorReportQueue {
    /// Append a new single-resolution slot and hand back its future
    pub(crate) fn enqueue(&mut self) -> CursorReport {
        let (sender, receiver) = oneshot::channel();
        self.pending.push_back(sender);
        CursorReport { receiver }
    }

    /// Resolve the oldest pending query
    ///
    /// Returns false when nothing is pending, in which case the caller
    /// surfaces the reply as an unhandled sequence. A reply delivered to an
    /// abandoned slot is discarded, but the slot is consumed either way so
    /// ordering holds for the remaining entries.
    pub(crate) fn resolve_next(&mut self, position: CursorPosition) -> bool {
        match self.pending.pop_front() {
            Some(sender) => {
                let _ = sender.send(position);
                true
            }
            None => false,
        }
    }

    /// Number of unanswered queries
    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    /// Drop every pending sender; outstanding futures resolve with
    /// [`Error::ReportAborted`]
    pub(crate) fn abort_all(&mut self) {
        self.pending.clear();
    }
}

/// Future for one cursor-position report
///
/// Returned immediately by `ServerTerminal::report_cursor_position`; resolves
/// when the matching (oldest-first) reply arrives on a later inbound
/// delivery, or with [`Error::ReportAborted`] if the connection is torn down
/// first.
#[derive(Debug)]
pub struct CursorReport {
    receiver: oneshot::Receiver<CursorPosition>,
}

impl Future for CursorReport {
    type Output = Result<CursorPosition>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map_err(|_| Error::ReportAborted)
    }
}
