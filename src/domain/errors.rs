//! Use-case error type shared by the forum handlers.

use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Kind of forum resource a lookup failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Thread,
    Comment,
    Reply,
}

impl Resource {
    pub fn not_found_code(&self) -> ErrorCode {
        match self {
            Resource::Thread => ErrorCode::ThreadNotFound,
            Resource::Comment => ErrorCode::CommentNotFound,
            Resource::Reply => ErrorCode::ReplyNotFound,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Resource::Thread => "thread",
            Resource::Comment => "comment",
            Resource::Reply => "reply",
        };
        write!(f, "{}", s)
    }
}

/// Errors returned by forum use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForumError {
    /// Payload failed entity validation.
    Validation(ValidationError),
    /// Referenced thread, comment or reply does not exist.
    NotFound { resource: Resource, message: String },
    /// Caller does not own the resource.
    Forbidden(String),
    /// A repository was wired without the capability the use case needs.
    NotImplemented(String),
    /// Storage or other infrastructure failure.
    Infrastructure(String),
}

impl ForumError {
    pub fn not_found(resource: Resource) -> Self {
        ForumError::NotFound {
            resource,
            message: format!("{} not found", resource),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ForumError::Forbidden(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ForumError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ForumError::Validation(err) => err.code(),
            ForumError::NotFound { resource, .. } => resource.not_found_code(),
            ForumError::Forbidden(_) => ErrorCode::Forbidden,
            ForumError::NotImplemented(_) => ErrorCode::MethodNotImplemented,
            ForumError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ForumError::Validation(err) => err.to_string(),
            ForumError::NotFound { message, .. } => message.clone(),
            ForumError::Forbidden(msg) => msg.clone(),
            ForumError::NotImplemented(msg) => msg.clone(),
            ForumError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ForumError::NotFound { .. })
    }
}

impl fmt::Display for ForumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ForumError {}

impl From<ValidationError> for ForumError {
    fn from(err: ValidationError) -> Self {
        ForumError::Validation(err)
    }
}

impl From<DomainError> for ForumError {
    fn from(err: DomainError) -> Self {
        let resource = match err.code {
            ErrorCode::ThreadNotFound => Some(Resource::Thread),
            ErrorCode::CommentNotFound => Some(Resource::Comment),
            ErrorCode::ReplyNotFound => Some(Resource::Reply),
            _ => None,
        };
        if let Some(resource) = resource {
            return ForumError::NotFound {
                resource,
                message: err.message,
            };
        }

        match err.code {
            ErrorCode::Forbidden | ErrorCode::Unauthorized => ForumError::Forbidden(err.message),
            ErrorCode::MethodNotImplemented => ForumError::NotImplemented(err.message),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField => {
                let field = err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string());
                ForumError::Validation(ValidationError::empty_field(field))
            }
            _ => ForumError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_domain_error_keeps_resource_and_message() {
        let err: ForumError =
            DomainError::new(ErrorCode::CommentNotFound, "comment not found").into();

        assert_eq!(
            err,
            ForumError::NotFound {
                resource: Resource::Comment,
                message: "comment not found".to_string(),
            }
        );
        assert_eq!(err.code(), ErrorCode::CommentNotFound);
    }

    #[test]
    fn forbidden_domain_error_maps_to_forbidden() {
        let err: ForumError = DomainError::new(ErrorCode::Forbidden, "not yours").into();
        assert_eq!(err, ForumError::Forbidden("not yours".to_string()));
    }

    #[test]
    fn not_implemented_keeps_repository_tag() {
        let err: ForumError =
            DomainError::not_implemented("THREAD_REPOSITORY", "add_thread").into();

        assert_eq!(err.message(), "THREAD_REPOSITORY.METHOD_NOT_IMPLEMENTED");
        assert_eq!(err.code(), ErrorCode::MethodNotImplemented);
    }

    #[test]
    fn database_error_becomes_infrastructure() {
        let err: ForumError = DomainError::database("add_thread", "connection reset").into();
        assert!(matches!(err, ForumError::Infrastructure(_)));
    }

    #[test]
    fn validation_error_passes_through() {
        let validation = ValidationError::missing_property("REGISTER_THREAD", "title");
        let err: ForumError = validation.clone().into();

        assert_eq!(err, ForumError::Validation(validation));
        assert_eq!(err.message(), "REGISTER_THREAD.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn not_found_helper_formats_message() {
        let err = ForumError::not_found(Resource::Thread);
        assert_eq!(err.message(), "thread not found");
        assert!(err.is_not_found());
    }
}
