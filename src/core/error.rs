use serde::Serialize;
use thiserror::Error;

/// Category of a single failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// A required field is absent or empty.
    MissingField,
    /// A field is present but not parseable into its expected shape (date, currency code).
    InvalidFormat,
    /// A field is parseable but semantically invalid (negative or non-numeric price).
    InvalidValue,
    /// Unexpected failure while producing PDF bytes from valid data.
    RenderFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "MissingField",
            Self::InvalidFormat => "InvalidFormat",
            Self::InvalidValue => "InvalidValue",
            Self::RenderFailure => "RenderFailure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field problem found during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the offending field (e.g. "price").
    pub field: String,
    pub kind: ErrorKind,
    /// Human-readable description, safe to return to the client.
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.field, self.message)
    }
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, ErrorKind::MissingField, format!("{field} is required"))
    }
}

/// Validation outcome listing every problem found in the input.
///
/// Never empty when returned from [`validate`](crate::core::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", join_errors(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// True if `field` failed with `kind`.
    pub fn has(&self, field: &str, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.field == field && e.kind == kind)
    }

    /// Names of the offending fields, in detection order.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

/// Failure inside the document-drawing primitives.
#[derive(Debug, Error)]
#[error("render failure: {message}")]
pub struct RenderError {
    pub message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::RenderFailure
    }
}

/// Errors that can occur anywhere between raw input and PDF bytes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// Startup configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),
}
