#![warn(missing_docs)]
//! `quickfix-render-host` - Host integration for `quickfix-render`.
//!
//! This crate contains the thin glue between a host application and the
//! rendering core: the [`ListStore`] collaborator trait the host implements
//! over its list storage, the inbound [`RenderRequest`] shape, the
//! [`render_range`] entry point that produces display lines plus a deferred
//! highlight application, and validation of loosely-typed (JSON-shaped)
//! setup options into the core's [`RenderOptions`](quickfix_render::RenderOptions).
//!
//! Registering [`render_range`] as the host's actual text-formatting hook is
//! host-specific and out of scope here; hosts call it from their hook and
//! invoke [`PendingHighlights::apply`](quickfix_render::PendingHighlights::apply)
//! once the returned lines are in the display buffer.

pub mod options;
pub mod store;

pub use options::{options_from_value, severity_from_tag};
pub use store::{
    ListScope, ListStore, RenderRequest, RenderResult, render_range, render_range_with_base,
};
