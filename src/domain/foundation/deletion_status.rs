//! DeletionStatus enum for soft-deleted forum content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a comment or reply.
///
/// Content is never removed from storage; deletion only flips the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeletionStatus {
    #[default]
    Active,
    Deleted,
}

impl DeletionStatus {
    /// Maps the storage `is_delete` flag to a status.
    pub fn from_flag(is_delete: bool) -> Self {
        if is_delete {
            DeletionStatus::Deleted
        } else {
            DeletionStatus::Active
        }
    }

    /// Returns the storage `is_delete` flag.
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeletionStatus::Deleted)
    }

    /// Returns the content to display for this status.
    ///
    /// Deleted content is replaced by `placeholder`; active content is shown as is.
    pub fn mask<'a>(&self, content: &'a str, placeholder: &'a str) -> &'a str {
        match self {
            DeletionStatus::Active => content,
            DeletionStatus::Deleted => placeholder,
        }
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Active -> Deleted
    pub fn can_transition_to(&self, target: &DeletionStatus) -> bool {
        use DeletionStatus::*;
        matches!((self, target), (Active, Deleted))
    }
}

impl fmt::Display for DeletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeletionStatus::Active => "Active",
            DeletionStatus::Deleted => "Deleted",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_active() {
        assert_eq!(DeletionStatus::default(), DeletionStatus::Active);
    }

    #[test]
    fn flag_maps_both_ways() {
        assert_eq!(DeletionStatus::from_flag(true), DeletionStatus::Deleted);
        assert_eq!(DeletionStatus::from_flag(false), DeletionStatus::Active);
        assert!(DeletionStatus::Deleted.is_deleted());
        assert!(!DeletionStatus::Active.is_deleted());
    }

    #[test]
    fn mask_replaces_only_deleted_content() {
        assert_eq!(DeletionStatus::Active.mask("hello", "**gone**"), "hello");
        assert_eq!(DeletionStatus::Deleted.mask("hello", "**gone**"), "**gone**");
    }

    #[test]
    fn active_can_transition_to_deleted() {
        assert!(DeletionStatus::Active.can_transition_to(&DeletionStatus::Deleted));
    }

    #[test]
    fn deleted_cannot_transition_back() {
        assert!(!DeletionStatus::Deleted.can_transition_to(&DeletionStatus::Active));
        assert!(!DeletionStatus::Deleted.can_transition_to(&DeletionStatus::Deleted));
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", DeletionStatus::Active), "Active");
        assert_eq!(format!("{}", DeletionStatus::Deleted), "Deleted");
    }
}
