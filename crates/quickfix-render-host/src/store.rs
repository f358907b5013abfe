//! List-store collaborators and the batch render entry point.
//!
//! The host owns list storage and navigation; this module defines the narrow
//! interface the renderer needs from it ([`ListStore`]) and the glue that
//! turns an inbound index-range request into display lines plus a deferred
//! highlight application.

use std::path::Path;

use quickfix_render::{
    DisplayItem, PendingHighlights, RawEntry, RenderConfig, normalize, render_batch,
};

/// Which variant of the host's list store a request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    /// The host's global list.
    Global,
    /// A window-local list.
    Local {
        /// Host window identifier owning the list.
        winid: u64,
    },
}

/// An inbound render request for a contiguous index range of one list
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    /// Host identifier of the list being rendered.
    pub list_id: u64,
    /// Global or window-local list variant.
    pub scope: ListScope,
    /// First entry index (1-based, inclusive). A start of `1` marks a fresh
    /// list population; anything later is an incremental append.
    pub start: usize,
    /// Last entry index (1-based, inclusive).
    pub end: usize,
}

impl RenderRequest {
    /// Whether this request replaces the displayed list rather than
    /// appending to it.
    pub fn is_fresh_population(&self) -> bool {
        self.start == 1
    }
}

/// Host list store backing one render request.
///
/// Implementations wrap whatever storage the host keeps its list in; the
/// renderer only reads from it.
pub trait ListStore {
    /// Fetch the entry at a 1-based index, or `None` when the store has no
    /// entry there. Absent entries are silently omitted from the output, not
    /// treated as errors.
    fn entry(&self, index: usize) -> Option<RawEntry>;

    /// The buffer number of the display buffer the rendered lines go into.
    fn display_bufnr(&self) -> u64;

    /// Resolve a buffer number to a file path.
    fn path_for_buffer(&self, bufnr: u64) -> Option<String>;
}

/// The outcome of one render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// One display line per entry found in the requested range, in batch
    /// order.
    pub lines: Vec<String>,
    /// The deferred highlight application. The host must invoke
    /// [`PendingHighlights::apply`] only after inserting `lines` into the
    /// display buffer.
    pub pending: PendingHighlights,
}

/// Render the requested index range, trimming paths relative to the current
/// working directory.
///
/// Rendering is total: missing entries, unrecognized severities, and
/// unresolvable buffers all degrade gracefully instead of failing.
pub fn render_range(
    config: &RenderConfig,
    store: &dyn ListStore,
    request: &RenderRequest,
) -> RenderResult {
    let base = std::env::current_dir().ok();
    render_range_with_base(config, store, request, base.as_deref())
}

/// Render the requested index range with an explicit path-trimming base.
pub fn render_range_with_base(
    config: &RenderConfig,
    store: &dyn ListStore,
    request: &RenderRequest,
    base: Option<&Path>,
) -> RenderResult {
    let mut items = Vec::<DisplayItem>::new();
    for index in request.start..=request.end {
        let Some(entry) = store.entry(index) else {
            continue;
        };
        items.push(normalize(
            config,
            index,
            &entry,
            |bufnr| store.path_for_buffer(bufnr),
            base,
        ));
    }

    let batch = render_batch(&items);
    RenderResult {
        lines: batch.lines,
        pending: PendingHighlights {
            bufnr: store.display_bufnr(),
            clear_first: request.is_fresh_population(),
            spans: batch.spans,
        },
    }
}
