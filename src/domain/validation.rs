//! Record-level validation rules: presence and URL format.
//!
//! Validation never short-circuits. Every rule runs and every violation is
//! collected, so callers can report all problems with a record at once.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Absolute `http`/`https` URL with a dotted host, optional port, and an
/// optional path, query, or fragment.
pub const DEFAULT_URL_PATTERN: &str = r"(?i)^https?://[a-z0-9]([a-z0-9-]*[a-z0-9])?(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)*(:[0-9]{1,5})?([/?#]\S*)?$";

static DEFAULT_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_URL_PATTERN).expect("default URL pattern is valid"));

/// Compiled URL format rule shared by every `*_url` field check.
///
/// Built once from configuration and handed to the validation code; it is
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    regex: Regex,
}

impl UrlPattern {
    /// Compiles a custom URL pattern.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error if `pattern` is not a valid expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Returns true if `value` satisfies the pattern.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for UrlPattern {
    fn default() -> Self {
        Self {
            regex: DEFAULT_URL_REGEX.clone(),
        }
    }
}

/// The eight assignable attributes of a recommendation.
///
/// Names match the storage columns and the JSON keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Quote,
    Who,
    WhoUrl,
    Where,
    WhereUrl,
    Position,
    Company,
    CompanyUrl,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Quote,
        Field::Who,
        Field::WhoUrl,
        Field::Where,
        Field::WhereUrl,
        Field::Position,
        Field::Company,
        Field::CompanyUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Quote => "quote",
            Field::Who => "who",
            Field::WhoUrl => "who_url",
            Field::Where => "where",
            Field::WhereUrl => "where_url",
            Field::Position => "position",
            Field::Company => "company",
            Field::CompanyUrl => "company_url",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation on a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only.
    #[error("{field} can't be blank")]
    Presence { field: Field },

    /// A non-blank URL field does not match the URL pattern.
    #[error("{field} is invalid")]
    Format { field: Field },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Presence { field } | ValidationError::Format { field } => *field,
        }
    }

    /// Machine-readable violation kind: `presence` or `format`.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::Presence { .. } => "presence",
            ValidationError::Format { .. } => "format",
        }
    }
}

/// Returns true for empty or whitespace-only text.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Records a presence violation if `value` is blank.
pub(crate) fn check_presence(errors: &mut Vec<ValidationError>, field: Field, value: &str) {
    if is_blank(value) {
        errors.push(ValidationError::Presence { field });
    }
}

/// Records a format violation if `value` is non-blank and does not match.
///
/// Blank and absent values are skipped.
pub(crate) fn check_format(
    errors: &mut Vec<ValidationError>,
    field: Field,
    value: Option<&str>,
    pattern: &UrlPattern,
) {
    match value {
        Some(v) if !is_blank(v) && !pattern.is_match(v) => {
            errors.push(ValidationError::Format { field });
        }
        _ => {}
    }
}
