#![warn(missing_docs)]
//! `quickfix-render` - Headless List-Panel Renderer
//!
//! # Overview
//!
//! `quickfix-render` turns a batch of diagnostic/result entries (compiler
//! errors, search matches, linter findings) into aligned, annotated display
//! lines plus the highlight spans that colorize them. It is headless: the
//! host owns list storage, navigation, and painting; this crate owns the
//! rendering pipeline in between.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Item Normalizer (signs, paths, line nrs)   │  ← per entry
//! ├─────────────────────────────────────────────┤
//! │  Alignment Calculator (batch-wide maxima)   │  ← first pass
//! ├─────────────────────────────────────────────┤
//! │  Line Renderer (text + highlight spans)     │  ← second pass
//! ├─────────────────────────────────────────────┤
//! │  Pending Highlights (deferred application)  │  ← host applies later
//! └─────────────────────────────────────────────┘
//! ```
//!
//! All column arithmetic uses **display width** (UAX #11), so CJK paths and
//! multi-byte messages align correctly; path truncation alone is defined in
//! character count.
//!
//! # Quick Start
//!
//! ```rust
//! use quickfix_render::{RawEntry, RenderConfig, Severity, normalize, render_batch};
//!
//! let config = RenderConfig::default();
//! let entries = vec![
//!     RawEntry {
//!         bufnr: 1,
//!         severity: Some(Severity::Error),
//!         lnum: 3,
//!         message: "unknown field".to_string(),
//!         ..RawEntry::default()
//!     },
//!     RawEntry {
//!         bufnr: 1,
//!         severity: Some(Severity::Warning),
//!         lnum: 10,
//!         end_lnum: 12,
//!         message: "unused import".to_string(),
//!         ..RawEntry::default()
//!     },
//! ];
//!
//! let items: Vec<_> = entries
//!     .iter()
//!     .enumerate()
//!     .map(|(i, entry)| {
//!         normalize(&config, i + 1, entry, |_bufnr| Some("src/lib.rs".to_string()), None)
//!     })
//!     .collect();
//!
//! let batch = render_batch(&items);
//! assert_eq!(batch.lines[0], "E src/lib.rs |    3| unknown field");
//! assert_eq!(batch.lines[1], "W src/lib.rs |10-12| unused import");
//! ```
//!
//! # Module Description
//!
//! - [`entry`] - raw entries and severity classification
//! - [`config`] - the explicit, setup-time configuration object
//! - [`path`] - path display and character-count truncation
//! - [`item`] - normalization and batch alignment
//! - [`render`] - line assembly and span accounting
//! - [`highlight`] - deferred highlight application

pub mod config;
pub mod entry;
pub mod highlight;
pub mod item;
pub mod path;
pub mod render;

pub use config::{
    ConfigError, LINE_NR_HIGHLIGHT_GROUP, LOCATION_HIGHLIGHT_GROUP, PathDisplayFn, RenderConfig,
    RenderOptions, Sign, SignOptions, SignSet, SignSetOptions,
};
pub use entry::{RawEntry, Severity};
pub use highlight::{DecorationSink, PendingHighlights};
pub use item::{Alignment, DisplayItem, normalize};
pub use path::display_path;
pub use render::{HighlightSpan, RenderedBatch, render_batch, render_line};
