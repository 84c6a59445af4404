use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Machine-readable reason attached to every [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Required,
    Blank,
    TooShort,
    TooLong,
    InvalidExtension,
    InvalidImage,
    FileTooLarge,
    InvalidChoice,
    UnknownMembers,
    InvalidSlug,
    InvalidMove,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::Blank => "blank",
            ErrorCode::TooShort => "too_short",
            ErrorCode::TooLong => "too_long",
            ErrorCode::InvalidExtension => "invalid_extension",
            ErrorCode::InvalidImage => "invalid_image",
            ErrorCode::FileTooLarge => "file_too_large",
            ErrorCode::InvalidChoice => "invalid_choice",
            ErrorCode::UnknownMembers => "unknown_members",
            ErrorCode::InvalidSlug => "invalid_slug",
            ErrorCode::InvalidMove => "invalid_move",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: String,

    pub code: ErrorCode,

    /// Human readable message, shown next to the field.
    pub message: String,
}

impl FieldError {
    /// Create a field-level error.
    pub fn field(name: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: name.into(),
            code,
            message: message.into(),
        }
    }
}

/// Every error gathered while cleaning one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("invalid submission ({} error(s))", .errors.len())]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Record a field error, dropping whatever was recorded for that field
    /// before.
    pub fn replace(&mut self, field: &str, code: ErrorCode, message: impl Into<String>) {
        self.errors.retain(|existing| existing.field != field);
        self.errors.push(FieldError::field(field, code, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |error| error.field == field)
    }

    /// Codes recorded for `field`, in insertion order.
    pub fn codes(&self, field: &str) -> Vec<ErrorCode> {
        self.for_field(field).map(|error| error.code).collect()
    }

    /// `Ok(value)` when nothing was recorded, `Err(self)` otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.errors
    }
}
