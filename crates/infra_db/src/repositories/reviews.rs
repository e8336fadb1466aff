//! Review repository implementation
//!
//! Two rules cannot be expressed as plain table constraints and are checked
//! by the queries themselves:
//! - a customer may only review an apartment after a stay there that ended
//!   on or before the review date (conditional INSERT)
//! - a review may only be updated forward in time (conditional UPDATE)

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use core_kernel::{ApartmentId, CustomerId};
use domain_rental::{Rating, Review};

use crate::error::DatabaseError;

/// Review record from the database
#[derive(Debug, Clone, FromRow)]
pub struct ReviewRow {
    pub customer_id: i32,
    pub apartment_id: i32,
    pub review_date: NaiveDate,
    pub rating: i16,
    pub review_text: String,
}

impl TryFrom<ReviewRow> for Review {
    type Error = DatabaseError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        let serialization = |e: &dyn std::fmt::Display| {
            DatabaseError::SerializationError(e.to_string())
        };
        let customer_id = CustomerId::new(row.customer_id).map_err(|e| serialization(&e))?;
        let apartment_id = ApartmentId::new(row.apartment_id).map_err(|e| serialization(&e))?;
        let rating = Rating::new(row.rating).map_err(|e| serialization(&e))?;
        Review::new(
            customer_id,
            apartment_id,
            row.review_date,
            rating,
            row.review_text,
        )
        .map_err(|e| serialization(&e))
    }
}

/// Repository for managing apartment reviews
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Creates a new ReviewRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Adds a review, provided the customer completed a stay at the
    /// apartment on or before the review date
    ///
    /// # Errors
    ///
    /// - `DatabaseError::NotFound` if the customer has no stay at the
    ///   apartment that ended by the review date
    /// - `DatabaseError::DuplicateEntry` if the customer already reviewed
    ///   the apartment
    pub async fn add(&self, review: &Review) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO reviews \
             (customer_id, apartment_id, review_date, rating, review_text) \
             SELECT $1, $2, $3, $4, $5 \
             WHERE EXISTS ( \
                 SELECT 1 FROM reservations r \
                 WHERE r.customer_id = $1 \
                   AND r.apartment_id = $2 \
                   AND r.end_date <= $3 \
             )",
        )
        .bind(review.customer_id.get())
        .bind(review.apartment_id.get())
        .bind(review.review_date)
        .bind(review.rating.get())
        .bind(&review.text)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!(
                "No stay by {} at {} completed by {}",
                review.customer_id, review.apartment_id, review.review_date
            )));
        }
        Ok(())
    }

    /// Updates an existing review's date, rating, and text
    ///
    /// The update only applies if the stored review is not newer than the
    /// update date.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the customer has no review for
    /// the apartment dated on or before the update date.
    pub async fn update(
        &self,
        customer_id: CustomerId,
        apartment_id: ApartmentId,
        update_date: NaiveDate,
        new_rating: Rating,
        new_text: &str,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "UPDATE reviews \
             SET review_date = $3, rating = $4, review_text = $5 \
             WHERE customer_id = $1 AND apartment_id = $2 AND review_date <= $3",
        )
        .bind(customer_id.get())
        .bind(apartment_id.get())
        .bind(update_date)
        .bind(new_rating.get())
        .bind(new_text)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!(
                "No review by {} for {} dated on or before {}",
                customer_id, apartment_id, update_date
            )));
        }
        Ok(())
    }

    /// Retrieves a customer's review of an apartment
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no such review exists.
    pub async fn get(
        &self,
        customer_id: CustomerId,
        apartment_id: ApartmentId,
    ) -> Result<Review, DatabaseError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            "SELECT customer_id, apartment_id, review_date, rating, review_text \
             FROM reviews \
             WHERE customer_id = $1 AND apartment_id = $2",
        )
        .bind(customer_id.get())
        .bind(apartment_id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            DatabaseError::NotFound(format!(
                "Review by {} for {} not found",
                customer_id, apartment_id
            ))
        })?;

        row.try_into()
    }
}
