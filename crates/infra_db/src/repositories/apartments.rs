//! Apartment repository implementation

use sqlx::{FromRow, PgPool};

use core_kernel::ApartmentId;
use domain_rental::Apartment;

use crate::error::DatabaseError;

/// Apartment record from the database
///
/// Shared with the ownership and analytics repositories, which also
/// return apartment rows.
#[derive(Debug, Clone, FromRow)]
pub struct ApartmentRow {
    pub apartment_id: i32,
    pub address: String,
    pub city: String,
    pub country: String,
    pub size_sqm: i32,
}

impl TryFrom<ApartmentRow> for Apartment {
    type Error = DatabaseError;

    fn try_from(row: ApartmentRow) -> Result<Self, Self::Error> {
        let id = ApartmentId::new(row.apartment_id)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        Apartment::new(id, row.address, row.city, row.country, row.size_sqm)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))
    }
}

/// Repository for managing apartment listings
#[derive(Debug, Clone)]
pub struct ApartmentRepository {
    pool: PgPool,
}

impl ApartmentRepository {
    /// Creates a new ApartmentRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new apartment listing
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::DuplicateEntry` if an apartment with the same
    /// id or the same (address, city, country) already exists.
    pub async fn insert(&self, apartment: &Apartment) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO apartments (apartment_id, address, city, country, size_sqm) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(apartment.id.get())
        .bind(&apartment.address)
        .bind(&apartment.city)
        .bind(&apartment.country)
        .bind(apartment.size_sqm)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Retrieves an apartment by id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no such apartment exists.
    pub async fn get_by_id(&self, apartment_id: ApartmentId) -> Result<Apartment, DatabaseError> {
        let row = sqlx::query_as::<_, ApartmentRow>(
            "SELECT apartment_id, address, city, country, size_sqm \
             FROM apartments WHERE apartment_id = $1",
        )
        .bind(apartment_id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Apartment", apartment_id))?;

        row.try_into()
    }

    /// Deletes an apartment along with its ownership link, reservations,
    /// and reviews (cascaded by the schema).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no such apartment exists.
    pub async fn delete(&self, apartment_id: ApartmentId) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM apartments WHERE apartment_id = $1")
            .bind(apartment_id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Apartment", apartment_id));
        }
        Ok(())
    }
}
