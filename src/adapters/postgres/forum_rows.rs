//! Row decoding shared by the forum repositories.

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::foundation::{DomainError, OwnedByUser, Timestamp, UserId};

/// Reads a column, mapping decode failures to `DatabaseError`.
pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

pub(super) fn timestamp_column(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    let value: chrono::DateTime<chrono::Utc> = column(row, name)?;
    Ok(Timestamp::from_datetime(value))
}

pub(super) fn user_column(row: &PgRow, name: &str) -> Result<UserId, DomainError> {
    let value: String = column(row, name)?;
    UserId::new(value).map_err(|e| DomainError::database(&format!("Invalid {}", name), e))
}

/// Owner column of a comment or reply row.
pub(super) struct OwnerRow(pub UserId);

impl OwnedByUser for OwnerRow {
    fn owner_id(&self) -> &UserId {
        &self.0
    }
}
