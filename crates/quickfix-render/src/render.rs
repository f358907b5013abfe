//! Line assembly and highlight span accounting.
//!
//! Builds the final display line for each normalized item and records the
//! column span of every colored segment. Span columns are **display-width
//! offsets** into the rendered line, accumulated as the line grows; byte
//! offsets would drift as soon as a path or message contains multi-byte
//! content.

use unicode_width::UnicodeWidthStr;

use crate::config::{LINE_NR_HIGHLIGHT_GROUP, LOCATION_HIGHLIGHT_GROUP};
use crate::item::{Alignment, DisplayItem};

/// A highlight to paint onto one rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Highlight group name.
    pub group: String,
    /// 0-based output line.
    pub line: usize,
    /// Start column (display-width offset, inclusive).
    pub col_start: usize,
    /// End column (display-width offset, exclusive).
    pub col_end: usize,
}

/// The rendered form of one batch: display lines in batch order plus every
/// highlight span to apply once the lines are in the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedBatch {
    /// One line per item, in batch order.
    pub lines: Vec<String>,
    /// Highlight spans across all rendered lines.
    pub spans: Vec<HighlightSpan>,
}

/// Accumulates one line while tracking its display width.
struct LineBuilder {
    text: String,
    width: usize,
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            text: String::new(),
            width: 0,
        }
    }

    /// Push a single separating space unless the line is still empty.
    fn separate(&mut self) {
        if !self.text.is_empty() {
            self.text.push(' ');
            self.width += 1;
        }
    }

    fn push(&mut self, segment: &str) {
        self.text.push_str(segment);
        self.width += segment.width();
    }

    fn pad(&mut self, cells: usize) {
        for _ in 0..cells {
            self.text.push(' ');
        }
        self.width += cells;
    }
}

/// Render one normalized item against the batch alignment.
///
/// Returns the line text and the spans recorded for it. Segments are
/// concatenated in sign / location / line-number / message order with a
/// single separating space between any two present segments; absent fields
/// are skipped entirely. An item with nothing to show yields a single space
/// rather than the empty string, so a host's fallback formatting never kicks
/// in.
pub fn render_line(item: &DisplayItem, alignment: &Alignment) -> (String, Vec<HighlightSpan>) {
    let line_index = item.index.saturating_sub(1);
    let mut line = LineBuilder::new();
    let mut spans = Vec::new();

    if alignment.reserve_sign_column {
        let start = line.width;
        line.push(&item.sign_glyph);
        if let Some(group) = &item.sign_highlight {
            spans.push(HighlightSpan {
                group: group.clone(),
                line: line_index,
                col_start: start,
                col_end: line.width,
            });
        }
    }

    if !item.location.is_empty() {
        line.separate();
        let start = line.width;
        line.push(&item.location);
        spans.push(HighlightSpan {
            group: LOCATION_HIGHLIGHT_GROUP.to_string(),
            line: line_index,
            col_start: start,
            // The span covers the unpadded location only.
            col_end: line.width,
        });
        line.pad(alignment.pad_to.saturating_sub(item.location_width));
    }

    if !item.lnum.is_empty() {
        line.separate();
        let start = line.width;
        line.push("|");
        line.pad(alignment.num_pad_to.saturating_sub(item.lnum_width));
        line.push(&item.lnum);
        line.push("|");
        spans.push(HighlightSpan {
            group: LINE_NR_HIGHLIGHT_GROUP.to_string(),
            line: line_index,
            col_start: start,
            // Padding inside the brackets is part of the span.
            col_end: line.width,
        });
    }

    if !item.message.is_empty() {
        line.separate();
        line.push(&item.message);
    }

    if line.text.is_empty() {
        line.text.push(' ');
    }

    (line.text, spans)
}

/// Render a whole batch: measure the alignment over `items`, then assemble
/// every line in batch order.
pub fn render_batch(items: &[DisplayItem]) -> RenderedBatch {
    let alignment = Alignment::measure(items);

    let mut batch = RenderedBatch {
        lines: Vec::with_capacity(items.len()),
        spans: Vec::new(),
    };
    for item in items {
        let (line, spans) = render_line(item, &alignment);
        batch.lines.push(line);
        batch.spans.extend(spans);
    }
    batch
}
