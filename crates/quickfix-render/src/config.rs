//! Renderer configuration.
//!
//! Configuration is an explicit object: constructed once from defaults,
//! mutated only through [`RenderConfig::configure`] during setup, and passed
//! by reference into every rendering call. There is no hidden global state.
//!
//! Sign glyphs/highlight groups are merged per field onto the defaults, never
//! replaced wholesale, so a host can override a single glyph without
//! restating the rest.

use crate::entry::Severity;

/// Highlight group applied to the location segment of a rendered line.
pub const LOCATION_HIGHLIGHT_GROUP: &str = "qfPath";

/// Highlight group applied to the bracketed line-number segment.
pub const LINE_NR_HIGHLIGHT_GROUP: &str = "qfPosition";

/// Optional transform from a raw display path to the final display path,
/// applied before truncation.
pub type PathDisplayFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Sign rendered in front of an entry of a given severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sign {
    /// The glyph placed in the sign column.
    pub glyph: String,
    /// The highlight group applied to the glyph.
    pub highlight: String,
}

impl Sign {
    /// Create a sign from a glyph and a highlight group name.
    pub fn new(glyph: impl Into<String>, highlight: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            highlight: highlight.into(),
        }
    }
}

/// The full set of signs, one per recognized severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignSet {
    /// Sign for [`Severity::Error`].
    pub error: Sign,
    /// Sign for [`Severity::Warning`].
    pub warning: Sign,
    /// Sign for [`Severity::Info`].
    pub info: Sign,
    /// Sign for [`Severity::Hint`].
    pub hint: Sign,
}

impl SignSet {
    /// Returns the sign configured for `severity`.
    pub fn get(&self, severity: Severity) -> &Sign {
        match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Info => &self.info,
            Severity::Hint => &self.hint,
        }
    }

    fn get_mut(&mut self, severity: Severity) -> &mut Sign {
        match severity {
            Severity::Error => &mut self.error,
            Severity::Warning => &mut self.warning,
            Severity::Info => &mut self.info,
            Severity::Hint => &mut self.hint,
        }
    }
}

impl Default for SignSet {
    fn default() -> Self {
        Self {
            error: Sign::new("E", "DiagnosticSignError"),
            warning: Sign::new("W", "DiagnosticSignWarn"),
            info: Sign::new("I", "DiagnosticSignInfo"),
            hint: Sign::new("H", "DiagnosticSignHint"),
        }
    }
}

/// Partial override for a single [`Sign`]; unset fields keep the current
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignOptions {
    /// Replacement glyph, if any.
    pub glyph: Option<String>,
    /// Replacement highlight group, if any.
    pub highlight: Option<String>,
}

/// Partial overrides for the sign set, keyed by severity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignSetOptions {
    /// Override for [`Severity::Error`].
    pub error: SignOptions,
    /// Override for [`Severity::Warning`].
    pub warning: SignOptions,
    /// Override for [`Severity::Info`].
    pub info: SignOptions,
    /// Override for [`Severity::Hint`].
    pub hint: SignOptions,
}

/// One-shot setup options accepted by [`RenderConfig::configure`].
///
/// Every field is optional; unset fields leave the current configuration
/// untouched. `signs` is a deep merge onto the current sign set.
#[derive(Default)]
pub struct RenderOptions {
    /// Per-severity sign overrides (deep merge).
    pub signs: SignSetOptions,
    /// Maximum display length for a path, in characters. `0` means
    /// unlimited.
    pub max_filename_length: Option<usize>,
    /// String prepended to a path that was truncated.
    pub filename_truncate_prefix: Option<String>,
    /// Custom path-display transform.
    pub path_display: Option<PathDisplayFn>,
}

impl std::fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderOptions")
            .field("signs", &self.signs)
            .field("max_filename_length", &self.max_filename_length)
            .field("filename_truncate_prefix", &self.filename_truncate_prefix)
            .field(
                "path_display",
                &self.path_display.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}

/// Renderer configuration.
///
/// Lifecycle: initialized with [`RenderConfig::default`], mutated only via
/// [`RenderConfig::configure`] in the setup path, read-only during rendering.
pub struct RenderConfig {
    /// Sign glyphs and highlight groups per severity.
    pub signs: SignSet,
    /// Maximum display length for a path, in characters (`0` = unlimited).
    pub max_filename_length: usize,
    /// String prepended when a path is left-truncated.
    pub filename_truncate_prefix: String,
    /// Optional path-display transform; identity when unset.
    pub path_display: Option<PathDisplayFn>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            signs: SignSet::default(),
            max_filename_length: 0,
            filename_truncate_prefix: "[...]".to_string(),
            path_display: None,
        }
    }
}

impl RenderConfig {
    /// Apply setup options onto the current configuration.
    ///
    /// Sign overrides merge per field; the other options replace the current
    /// value when set. This call itself cannot fail: by the time a
    /// [`RenderOptions`] exists, every option is well typed (loosely-typed
    /// input is validated up front and rejected with [`ConfigError`]).
    pub fn configure(&mut self, options: RenderOptions) {
        for severity in [
            Severity::Error,
            Severity::Warning,
            Severity::Info,
            Severity::Hint,
        ] {
            let override_for = match severity {
                Severity::Error => &options.signs.error,
                Severity::Warning => &options.signs.warning,
                Severity::Info => &options.signs.info,
                Severity::Hint => &options.signs.hint,
            };
            let sign = self.signs.get_mut(severity);
            if let Some(glyph) = &override_for.glyph {
                sign.glyph = glyph.clone();
            }
            if let Some(highlight) = &override_for.highlight {
                sign.highlight = highlight.clone();
            }
        }

        if let Some(max) = options.max_filename_length {
            self.max_filename_length = max;
        }
        if let Some(prefix) = options.filename_truncate_prefix {
            self.filename_truncate_prefix = prefix;
        }
        if let Some(transform) = options.path_display {
            self.path_display = Some(transform);
        }
    }
}

/// Configuration errors.
///
/// Raised while validating loosely-typed setup options (see the host crate's
/// `options_from_value`) before anything is merged. The message names the
/// offending option so misconfiguration surfaces at setup time, not later
/// during rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An option had the wrong type.
    InvalidType {
        /// Dotted path of the offending option (e.g. `signs.error.glyph`).
        option: String,
        /// Human-readable description of the expected type.
        expected: &'static str,
    },
    /// An option key is not recognized.
    UnknownOption(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidType { option, expected } => {
                write!(f, "invalid type for option `{option}`: expected {expected}")
            }
            ConfigError::UnknownOption(option) => {
                write!(f, "unknown option `{option}`")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
