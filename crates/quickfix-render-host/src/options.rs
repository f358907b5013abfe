//! Loosely-typed setup options and severity-tag parsing.
//!
//! Hosts hand configuration over as JSON-shaped data. This module validates
//! that data into the core's typed [`RenderOptions`], failing fast with a
//! [`ConfigError`] that names the offending option. Validation is not
//! atomic across options: the returned error aborts the setup call, but it
//! is raised before anything is merged, so callers that apply the parsed
//! options in one step get all-or-nothing behavior per call.

use quickfix_render::{ConfigError, RenderOptions, Severity, SignOptions, SignSetOptions};
use serde_json::Value;

/// Parse a host severity tag into a recognized severity.
///
/// Accepts the single-letter list-entry types (`E`/`W`/`I`/`N`) and their
/// spelled-out forms, case-insensitively. Anything else is unrecognized and
/// renders with a blank sign.
pub fn severity_from_tag(tag: &str) -> Option<Severity> {
    match tag.to_ascii_lowercase().as_str() {
        "e" | "error" => Some(Severity::Error),
        "w" | "warning" => Some(Severity::Warning),
        "i" | "info" | "information" => Some(Severity::Info),
        "n" | "note" | "h" | "hint" => Some(Severity::Hint),
        _ => None,
    }
}

/// Parse a loosely-typed options object into [`RenderOptions`].
///
/// Recognized keys: `signs` (per-severity string or `{glyph, highlight}`
/// object, deep-merged), `max_filename_length` (non-negative integer),
/// `filename_truncate_prefix` (string). A wrong-typed option or an unknown
/// key fails with a [`ConfigError`] naming it. `path_display` cannot cross a
/// JSON boundary and is rejected; set it on [`RenderOptions`] directly.
pub fn options_from_value(value: &Value) -> Result<RenderOptions, ConfigError> {
    let Some(object) = value.as_object() else {
        return Err(ConfigError::InvalidType {
            option: "options".to_string(),
            expected: "an object",
        });
    };

    let mut options = RenderOptions::default();
    for (key, value) in object {
        match key.as_str() {
            "signs" => options.signs = sign_set_from_value(value)?,
            "max_filename_length" => {
                let max = value.as_u64().ok_or_else(|| ConfigError::InvalidType {
                    option: "max_filename_length".to_string(),
                    expected: "a non-negative integer",
                })?;
                options.max_filename_length = Some(max as usize);
            }
            "filename_truncate_prefix" => {
                let prefix = value.as_str().ok_or_else(|| ConfigError::InvalidType {
                    option: "filename_truncate_prefix".to_string(),
                    expected: "a string",
                })?;
                options.filename_truncate_prefix = Some(prefix.to_string());
            }
            "path_display" => {
                return Err(ConfigError::InvalidType {
                    option: "path_display".to_string(),
                    expected: "a callable set programmatically on RenderOptions",
                });
            }
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
    }
    Ok(options)
}

fn sign_set_from_value(value: &Value) -> Result<SignSetOptions, ConfigError> {
    let Some(object) = value.as_object() else {
        return Err(ConfigError::InvalidType {
            option: "signs".to_string(),
            expected: "an object keyed by severity",
        });
    };

    let mut signs = SignSetOptions::default();
    for (key, value) in object {
        let slot = match key.as_str() {
            "error" => &mut signs.error,
            "warning" => &mut signs.warning,
            "info" => &mut signs.info,
            "hint" => &mut signs.hint,
            other => return Err(ConfigError::UnknownOption(format!("signs.{other}"))),
        };
        *slot = sign_from_value(key, value)?;
    }
    Ok(signs)
}

fn sign_from_value(severity: &str, value: &Value) -> Result<SignOptions, ConfigError> {
    // A bare string overrides only the glyph.
    if let Some(glyph) = value.as_str() {
        return Ok(SignOptions {
            glyph: Some(glyph.to_string()),
            highlight: None,
        });
    }

    let Some(object) = value.as_object() else {
        return Err(ConfigError::InvalidType {
            option: format!("signs.{severity}"),
            expected: "a string or a {glyph, highlight} object",
        });
    };

    let mut sign = SignOptions::default();
    for (key, value) in object {
        let slot = match key.as_str() {
            "glyph" => &mut sign.glyph,
            "highlight" => &mut sign.highlight,
            other => {
                return Err(ConfigError::UnknownOption(format!(
                    "signs.{severity}.{other}"
                )));
            }
        };
        let text = value.as_str().ok_or_else(|| ConfigError::InvalidType {
            option: format!("signs.{severity}.{key}"),
            expected: "a string",
        })?;
        *slot = Some(text.to_string());
    }
    Ok(sign)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_tags_are_case_insensitive() {
        assert_eq!(severity_from_tag("E"), Some(Severity::Error));
        assert_eq!(severity_from_tag("warning"), Some(Severity::Warning));
        assert_eq!(severity_from_tag("N"), Some(Severity::Hint));
        assert_eq!(severity_from_tag("fatal"), None);
        assert_eq!(severity_from_tag(""), None);
    }

    #[test]
    fn parses_well_typed_options() {
        let options = options_from_value(&json!({
            "signs": {
                "error": "✗",
                "warning": { "glyph": "▲", "highlight": "WarningMsg" },
            },
            "max_filename_length": 20,
            "filename_truncate_prefix": "…",
        }))
        .unwrap();

        assert_eq!(options.signs.error.glyph.as_deref(), Some("✗"));
        assert_eq!(options.signs.error.highlight, None);
        assert_eq!(options.signs.warning.glyph.as_deref(), Some("▲"));
        assert_eq!(options.signs.warning.highlight.as_deref(), Some("WarningMsg"));
        assert_eq!(options.signs.hint, SignOptions::default());
        assert_eq!(options.max_filename_length, Some(20));
        assert_eq!(options.filename_truncate_prefix.as_deref(), Some("…"));
    }

    #[test]
    fn wrong_types_name_the_option() {
        let err = options_from_value(&json!({ "max_filename_length": "20" })).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidType {
                option: "max_filename_length".to_string(),
                expected: "a non-negative integer",
            }
        );

        let err = options_from_value(&json!({ "max_filename_length": -1 })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidType { .. }));

        let err = options_from_value(&json!({ "filename_truncate_prefix": 3 })).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidType {
                option: "filename_truncate_prefix".to_string(),
                expected: "a string",
            }
        );

        let err = options_from_value(&json!({ "signs": { "error": 1 } })).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidType {
                option: "signs.error".to_string(),
                expected: "a string or a {glyph, highlight} object",
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = options_from_value(&json!({ "mx_filename_length": 5 })).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownOption("mx_filename_length".to_string())
        );

        let err = options_from_value(&json!({ "signs": { "fatal": "F" } })).unwrap_err();
        assert_eq!(err, ConfigError::UnknownOption("signs.fatal".to_string()));

        let err =
            options_from_value(&json!({ "signs": { "error": { "text": "E" } } })).unwrap_err();
        assert_eq!(err, ConfigError::UnknownOption("signs.error.text".to_string()));
    }

    #[test]
    fn path_display_cannot_cross_the_json_boundary() {
        let err = options_from_value(&json!({ "path_display": "shorten" })).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidType { option, .. } if option == "path_display"
        ));
    }
}
