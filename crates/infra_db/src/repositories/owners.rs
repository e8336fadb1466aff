//! Owner repository implementation

use sqlx::{FromRow, PgPool};

use core_kernel::OwnerId;
use domain_rental::Owner;

use crate::error::DatabaseError;

/// Owner record from the database
#[derive(Debug, Clone, FromRow)]
pub struct OwnerRow {
    pub owner_id: i32,
    pub owner_name: String,
}

impl TryFrom<OwnerRow> for Owner {
    type Error = DatabaseError;

    fn try_from(row: OwnerRow) -> Result<Self, Self::Error> {
        let id = OwnerId::new(row.owner_id)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        Owner::new(id, row.owner_name)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))
    }
}

/// Repository for managing apartment owners
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::OwnerRepository;
///
/// let repo = OwnerRepository::new(pool);
/// repo.insert(&owner).await?;
/// let fetched = repo.get_by_id(owner.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct OwnerRepository {
    pool: PgPool,
}

impl OwnerRepository {
    /// Creates a new OwnerRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new owner
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::DuplicateEntry` if an owner with the same id
    /// already exists.
    pub async fn insert(&self, owner: &Owner) -> Result<(), DatabaseError> {
        sqlx::query("INSERT INTO owners (owner_id, owner_name) VALUES ($1, $2)")
            .bind(owner.id.get())
            .bind(&owner.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Retrieves an owner by id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no such owner exists.
    pub async fn get_by_id(&self, owner_id: OwnerId) -> Result<Owner, DatabaseError> {
        let row = sqlx::query_as::<_, OwnerRow>(
            "SELECT owner_id, owner_name FROM owners WHERE owner_id = $1",
        )
        .bind(owner_id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Owner", owner_id))?;

        row.try_into()
    }

    /// Deletes an owner; owned apartments lose their ownership link via
    /// cascade, the apartments themselves remain.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no such owner exists.
    pub async fn delete(&self, owner_id: OwnerId) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM owners WHERE owner_id = $1")
            .bind(owner_id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Owner", owner_id));
        }
        Ok(())
    }
}
