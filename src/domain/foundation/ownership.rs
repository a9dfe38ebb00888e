//! Ownership trait for user-owned forum content.
//!
//! Threads, comments and replies each have exactly one owner: the user who
//! created them. Deletion is only allowed for that user.
//!
//! # Example
//!
//! ```ignore
//! impl OwnedByUser for Comment {
//!     fn owner_id(&self) -> &UserId {
//!         &self.owner
//!     }
//! }
//!
//! // In a repository adapter:
//! comment.check_ownership(&owner)?;  // Returns Err(Forbidden) if not owner
//! ```

use super::{DomainError, ErrorCode, UserId};

/// Trait for resources that have a single owner.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Validates ownership, returning a `Forbidden` error if the user is not the owner.
    fn check_ownership(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "You are not allowed to access this resource",
            )
            .with_detail("owner_id", self.owner_id().to_string())
            .with_detail("requested_by", user_id.to_string()))
        }
    }
}
