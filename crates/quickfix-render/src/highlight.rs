//! Deferred highlight application.
//!
//! The render call returns the spans as data ([`PendingHighlights`]) instead
//! of painting them itself: the host only inserts the rendered lines into its
//! display buffer *after* the call returns, and highlights applied before the
//! lines exist attach to nothing. The host-integration layer invokes
//! [`PendingHighlights::apply`] (typically on the next turn of its event
//! loop) once the insertion is done. Once scheduled, application always runs
//! to completion; batches are never withdrawn.

use crate::render::HighlightSpan;

/// Host decoration subsystem, scoped to a private namespace.
///
/// The namespace is owned by the implementation; this crate only asks for it
/// to be cleared or painted into, so the renderer's highlights never collide
/// with other decorators on the same buffer.
pub trait DecorationSink {
    /// Remove every highlight previously applied through this sink's
    /// namespace on `bufnr`.
    fn clear_namespace(&mut self, bufnr: u64);

    /// Paint one span onto `bufnr`.
    fn apply_span(&mut self, bufnr: u64, span: &HighlightSpan);
}

/// The deferred side effect of one render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingHighlights {
    /// Buffer the rendered lines were (or will be) inserted into.
    pub bufnr: u64,
    /// Whether the namespace is cleared before painting. Set only when the
    /// batch is a fresh list population, not an incremental append.
    pub clear_first: bool,
    /// Every span recorded for the batch.
    pub spans: Vec<HighlightSpan>,
}

impl PendingHighlights {
    /// Apply the batch's highlights through `sink`.
    ///
    /// Must run after the rendered lines have been inserted into the target
    /// buffer.
    pub fn apply(&self, sink: &mut dyn DecorationSink) {
        if self.clear_first {
            sink.clear_namespace(self.bufnr);
        }
        for span in &self.spans {
            sink.apply_span(self.bufnr, span);
        }
    }
}
