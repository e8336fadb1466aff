//! Ownership link repository
//!
//! Connects owners to the apartments they list. Each apartment has at most
//! one owner (the ownerships table's primary key); an owner may hold many
//! apartments.

use sqlx::PgPool;

use core_kernel::{ApartmentId, OwnerId};
use domain_rental::{Apartment, Owner};

use crate::error::DatabaseError;
use crate::repositories::apartments::ApartmentRow;
use crate::repositories::owners::OwnerRow;

/// Repository for managing owner-apartment links
#[derive(Debug, Clone)]
pub struct OwnershipRepository {
    pool: PgPool,
}

impl OwnershipRepository {
    /// Creates a new OwnershipRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records that an owner owns an apartment
    ///
    /// # Errors
    ///
    /// - `DatabaseError::DuplicateEntry` if the apartment already has an owner
    /// - `DatabaseError::ForeignKeyViolation` if the owner or apartment does
    ///   not exist
    pub async fn assign(
        &self,
        owner_id: OwnerId,
        apartment_id: ApartmentId,
    ) -> Result<(), DatabaseError> {
        sqlx::query("INSERT INTO ownerships (apartment_id, owner_id) VALUES ($1, $2)")
            .bind(apartment_id.get())
            .bind(owner_id.get())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Removes the link between an owner and an apartment
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the owner does not own the
    /// apartment.
    pub async fn release(
        &self,
        owner_id: OwnerId,
        apartment_id: ApartmentId,
    ) -> Result<(), DatabaseError> {
        let result =
            sqlx::query("DELETE FROM ownerships WHERE owner_id = $1 AND apartment_id = $2")
                .bind(owner_id.get())
                .bind(apartment_id.get())
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!(
                "{} does not own {}",
                owner_id, apartment_id
            )));
        }
        Ok(())
    }

    /// Retrieves the owner of an apartment
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the apartment has no owner.
    pub async fn owner_of(&self, apartment_id: ApartmentId) -> Result<Owner, DatabaseError> {
        let row = sqlx::query_as::<_, OwnerRow>(
            "SELECT o.owner_id, o.owner_name \
             FROM owners o \
             JOIN ownerships w ON w.owner_id = o.owner_id \
             WHERE w.apartment_id = $1",
        )
        .bind(apartment_id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            DatabaseError::NotFound(format!("{} has no registered owner", apartment_id))
        })?;

        row.try_into()
    }

    /// Retrieves all apartments owned by an owner, ordered by apartment id
    ///
    /// Returns an empty list for an unknown owner.
    pub async fn apartments_of(&self, owner_id: OwnerId) -> Result<Vec<Apartment>, DatabaseError> {
        let rows = sqlx::query_as::<_, ApartmentRow>(
            "SELECT a.apartment_id, a.address, a.city, a.country, a.size_sqm \
             FROM apartments a \
             JOIN ownerships w ON w.apartment_id = a.apartment_id \
             WHERE w.owner_id = $1 \
             ORDER BY a.apartment_id",
        )
        .bind(owner_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Apartment::try_from).collect()
    }
}
