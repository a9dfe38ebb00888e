//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur while constructing entities from payloads.
///
/// Payload errors render with the entity tag first, e.g.
/// `REGISTER_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{entity}.NOT_CONTAIN_NEEDED_PROPERTY")]
    MissingProperty { entity: &'static str, field: String },

    #[error("{entity}.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    DataTypeMismatch { entity: &'static str, field: String },

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    /// Creates a missing property error for an entity field.
    pub fn missing_property(entity: &'static str, field: impl Into<String>) -> Self {
        ValidationError::MissingProperty {
            entity,
            field: field.into(),
        }
    }

    /// Creates a data type mismatch error for an entity field.
    pub fn data_type_mismatch(entity: &'static str, field: impl Into<String>) -> Self {
        ValidationError::DataTypeMismatch {
            entity,
            field: field.into(),
        }
    }

    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Returns the offending field name.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingProperty { field, .. }
            | ValidationError::DataTypeMismatch { field, .. }
            | ValidationError::EmptyField { field } => field,
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingProperty { .. } => ErrorCode::NotContainNeededProperty,
            ValidationError::DataTypeMismatch { .. } => ErrorCode::NotMeetDataTypeSpecification,
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    NotContainNeededProperty,
    NotMeetDataTypeSpecification,

    // Not found errors
    ThreadNotFound,
    CommentNotFound,
    ReplyNotFound,

    // Authorization errors
    Unauthorized,
    Forbidden,

    // Wiring errors
    MethodNotImplemented,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// Returns true for the not-found family of codes.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::ThreadNotFound | ErrorCode::CommentNotFound | ErrorCode::ReplyNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::NotContainNeededProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            ErrorCode::NotMeetDataTypeSpecification => "NOT_MEET_DATA_TYPE_SPECIFICATION",
            ErrorCode::ThreadNotFound => "THREAD_NOT_FOUND",
            ErrorCode::CommentNotFound => "COMMENT_NOT_FOUND",
            ErrorCode::ReplyNotFound => "REPLY_NOT_FOUND",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::MethodNotImplemented => "METHOD_NOT_IMPLEMENTED",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Creates the error a repository returns for a capability it does not provide.
    ///
    /// The message reads `<REPOSITORY>.METHOD_NOT_IMPLEMENTED`.
    pub fn not_implemented(repository: &str, method: &str) -> Self {
        Self::new(
            ErrorCode::MethodNotImplemented,
            format!("{}.METHOD_NOT_IMPLEMENTED", repository),
        )
        .with_detail("method", method)
    }

    /// Creates a database error wrapping an adapter failure.
    pub fn database(context: &str, err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(err.code(), err.to_string()).with_detail("field", err.field())
    }
}
