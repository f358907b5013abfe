//! Entry normalization and batch alignment.
//!
//! The rendering pipeline is two explicit passes: first every raw entry in
//! the batch is normalized into a [`DisplayItem`] with its display widths
//! measured, then [`Alignment::measure`] folds the batch into the padding
//! targets the line renderer needs. The split keeps the cross-item alignment
//! decisions (column widths, sign-column reservation) testable in isolation.

use std::path::Path;

use unicode_width::UnicodeWidthStr;

use crate::config::RenderConfig;
use crate::entry::RawEntry;
use crate::path::display_path;

/// One normalized entry, ready for line assembly.
///
/// Owned by a single rendering pass and discarded once the lines and
/// highlight spans are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// 1-based position of the entry in the host list. The rendered line
    /// lands at output line `index - 1`.
    pub index: usize,
    /// Sign glyph; a single space when the severity is unrecognized.
    pub sign_glyph: String,
    /// Sign highlight group; `None` when the severity is unrecognized.
    pub sign_highlight: Option<String>,
    /// Display path, empty when the entry has no backing buffer.
    pub location: String,
    /// Display width of [`DisplayItem::location`].
    pub location_width: usize,
    /// Line-number text: empty, `"N"`, or `"N-M"`.
    pub lnum: String,
    /// Display width of [`DisplayItem::lnum`].
    pub lnum_width: usize,
    /// First line of the message, trimmed of surrounding whitespace.
    pub message: String,
}

/// Normalize one raw entry.
///
/// `resolve_path` is the host collaborator that maps a buffer number to a
/// file path; it is consulted only when the entry has a positive buffer
/// number. `base` is the directory paths are made relative to (typically the
/// current working directory).
pub fn normalize(
    config: &RenderConfig,
    index: usize,
    entry: &RawEntry,
    resolve_path: impl FnOnce(u64) -> Option<String>,
    base: Option<&Path>,
) -> DisplayItem {
    let (sign_glyph, sign_highlight) = match entry.severity {
        Some(severity) => {
            let sign = config.signs.get(severity);
            (sign.glyph.clone(), Some(sign.highlight.clone()))
        }
        None => (" ".to_string(), None),
    };

    let location = if entry.bufnr > 0 {
        resolve_path(entry.bufnr)
            .map(|path| display_path(config, &path, base))
            .unwrap_or_default()
    } else {
        String::new()
    };

    let lnum = format_line_number(entry.lnum, entry.end_lnum);

    let message = entry
        .message
        .split('\n')
        .next()
        .unwrap_or("")
        .trim()
        .to_string();

    DisplayItem {
        index,
        sign_glyph,
        sign_highlight,
        location_width: location.width(),
        location,
        lnum_width: lnum.width(),
        lnum,
        message,
    }
}

/// Format the line-number field: empty when `lnum` is zero, `"N"` for a
/// single line, `"N-M"` when a positive end line differs from the start.
fn format_line_number(lnum: u32, end_lnum: u32) -> String {
    if lnum == 0 {
        return String::new();
    }
    if end_lnum > 0 && end_lnum != lnum {
        format!("{lnum}-{end_lnum}")
    } else {
        lnum.to_string()
    }
}

/// Padding targets computed over one batch of normalized items.
///
/// The maxima cover the current batch only; nothing persists across
/// batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alignment {
    /// Maximum location display width in the batch; locations are
    /// right-padded to this width.
    pub pad_to: usize,
    /// Maximum line-number display width in the batch; line numbers are
    /// left-padded to this width inside their brackets.
    pub num_pad_to: usize,
    /// Whether the sign column is rendered at all. True iff at least one
    /// item in the batch has a recognized severity; items without one then
    /// occupy the column with their blank glyph.
    pub reserve_sign_column: bool,
}

impl Alignment {
    /// Fold a batch of normalized items into its padding targets.
    pub fn measure(items: &[DisplayItem]) -> Self {
        let mut alignment = Alignment::default();
        for item in items {
            alignment.pad_to = alignment.pad_to.max(item.location_width);
            alignment.num_pad_to = alignment.num_pad_to.max(item.lnum_width);
            alignment.reserve_sign_column |= item.sign_highlight.is_some();
        }
        alignment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Severity;

    fn item(location: &str, lnum: &str, severity: Option<Severity>) -> DisplayItem {
        DisplayItem {
            index: 1,
            sign_glyph: " ".to_string(),
            sign_highlight: severity.map(|_| "DiagnosticSignError".to_string()),
            location: location.to_string(),
            location_width: location.width(),
            lnum: lnum.to_string(),
            lnum_width: lnum.width(),
            message: String::new(),
        }
    }

    #[test]
    fn line_number_forms() {
        assert_eq!(format_line_number(10, 10), "10");
        assert_eq!(format_line_number(10, 15), "10-15");
        assert_eq!(format_line_number(10, 0), "10");
        assert_eq!(format_line_number(0, 15), "");
        assert_eq!(format_line_number(0, 0), "");
    }

    #[test]
    fn normalize_keeps_first_message_line_trimmed() {
        let config = RenderConfig::default();
        let entry = RawEntry {
            message: "  line one \r\nline two".to_string(),
            ..RawEntry::default()
        };
        let item = normalize(&config, 1, &entry, |_| None, None);
        assert_eq!(item.message, "line one");
    }

    #[test]
    fn normalize_skips_path_resolution_without_buffer() {
        let config = RenderConfig::default();
        let entry = RawEntry::default();
        let item = normalize(
            &config,
            1,
            &entry,
            |_| panic!("resolver must not be called for bufnr 0"),
            None,
        );
        assert_eq!(item.location, "");
        assert_eq!(item.location_width, 0);
    }

    #[test]
    fn normalize_measures_display_width_not_bytes() {
        let config = RenderConfig::default();
        let entry = RawEntry {
            bufnr: 3,
            lnum: 7,
            ..RawEntry::default()
        };
        let item = normalize(&config, 1, &entry, |_| Some("宽字.rs".to_string()), None);
        // Two double-width CJK characters plus ".rs".
        assert_eq!(item.location, "宽字.rs");
        assert_eq!(item.location_width, 7);
        assert_eq!(item.lnum_width, 1);
    }

    #[test]
    fn measure_tracks_batch_maxima() {
        let items = vec![
            item("a.rs", "3", Some(Severity::Error)),
            item("longer/path.rs", "10-15", None),
            item("", "", None),
        ];
        let alignment = Alignment::measure(&items);
        assert_eq!(alignment.pad_to, 14);
        assert_eq!(alignment.num_pad_to, 5);
        assert!(alignment.reserve_sign_column);
    }

    #[test]
    fn measure_without_recognized_severity_reserves_nothing() {
        let items = vec![item("a.rs", "3", None)];
        let alignment = Alignment::measure(&items);
        assert!(!alignment.reserve_sign_column);

        assert_eq!(Alignment::measure(&[]), Alignment::default());
    }
}
