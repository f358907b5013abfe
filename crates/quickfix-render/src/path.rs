//! Path display helpers.
//!
//! Converts a raw (possibly absolute) path into its display form: made
//! relative to a base directory when possible, run through the configured
//! transform, and left-truncated by **character count** (not bytes, not
//! display width) with a marker prefix.

use std::path::Path;

use crate::config::RenderConfig;

/// Compute the display form of `raw`.
///
/// Steps, in order:
///
/// 1. If `raw` is under `base`, keep only the part relative to `base`;
///    otherwise keep `raw` unchanged.
/// 2. Apply the configured `path_display` transform, if any.
/// 3. If `max_filename_length` is positive and the result is longer (in
///    characters), keep exactly the trailing `max_filename_length` characters
///    and prepend `filename_truncate_prefix`.
///
/// The truncation prefix does not count against the length budget; the budget
/// applies strictly to kept original characters.
pub fn display_path(config: &RenderConfig, raw: &str, base: Option<&Path>) -> String {
    let relative = match base.and_then(|base| Path::new(raw).strip_prefix(base).ok()) {
        Some(stripped) => stripped.to_string_lossy().into_owned(),
        None => raw.to_string(),
    };

    let transformed = match &config.path_display {
        Some(transform) => transform(&relative),
        None => relative,
    };

    truncate_left(
        &transformed,
        config.max_filename_length,
        &config.filename_truncate_prefix,
    )
}

/// Keep the trailing `max` characters of `path`, prepending `prefix` when
/// anything was dropped. `max == 0` disables truncation.
fn truncate_left(path: &str, max: usize, prefix: &str) -> String {
    if max == 0 {
        return path.to_string();
    }
    let char_count = path.chars().count();
    if char_count <= max {
        return path.to_string();
    }

    let mut out = String::with_capacity(prefix.len() + path.len());
    out.push_str(prefix);
    out.extend(path.chars().skip(char_count - max));
    out
}
