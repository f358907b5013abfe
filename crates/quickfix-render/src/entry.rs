//! Raw list entries as handed over by the host's list store.
//!
//! The renderer never fetches entries itself; it is given a batch of
//! [`RawEntry`] values covering a contiguous index range of the host's list
//! snapshot. Entries are read-only to this crate.

/// Severity classification of a list entry.
///
/// The set is fixed; host-specific severity tags that do not map onto one of
/// these variants are modeled as `None` on the entry and degrade gracefully
/// during rendering (blank sign, no sign highlight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Error entries.
    Error,
    /// Warning entries.
    Warning,
    /// Informational entries.
    Info,
    /// Hint entries.
    Hint,
}

/// A single raw entry from the host's list store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Host buffer number backing the entry. `0` means no buffer, in which
    /// case the rendered line carries no location field.
    pub bufnr: u64,
    /// Recognized severity, or `None` for an unrecognized tag.
    pub severity: Option<Severity>,
    /// Starting line number (1-based). `0` means no valid line number.
    pub lnum: u32,
    /// Ending line number (1-based). `0` means no end line; the range form
    /// `start-end` is rendered only when this is positive and differs from
    /// [`RawEntry::lnum`].
    pub end_lnum: u32,
    /// Free-text message. May contain embedded line breaks; only the first
    /// line is rendered.
    pub message: String,
}

impl Default for RawEntry {
    fn default() -> Self {
        Self {
            bufnr: 0,
            severity: None,
            lnum: 0,
            end_lnum: 0,
            message: String::new(),
        }
    }
}
