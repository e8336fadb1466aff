//! Reservation repository implementation
//!
//! Double-booking protection is the schema's range exclusion constraint:
//! inserting a reservation whose stay shares a night with an existing one
//! for the same apartment fails with a 23P01 exclusion violation, which
//! surfaces here as `DatabaseError::BookingOverlap`. Concurrent inserts are
//! therefore safe without any application-level locking.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use core_kernel::{ApartmentId, CustomerId, StayPeriod};
use domain_rental::Reservation;

use crate::error::DatabaseError;

/// Reservation record from the database
#[derive(Debug, Clone, FromRow)]
pub struct ReservationRow {
    pub customer_id: i32,
    pub apartment_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = DatabaseError;

    fn try_from(row: ReservationRow) -> Result<Self, Self::Error> {
        let serialization = |e: &dyn std::fmt::Display| {
            DatabaseError::SerializationError(e.to_string())
        };
        let customer_id = CustomerId::new(row.customer_id).map_err(|e| serialization(&e))?;
        let apartment_id = ApartmentId::new(row.apartment_id).map_err(|e| serialization(&e))?;
        let period =
            StayPeriod::new(row.start_date, row.end_date).map_err(|e| serialization(&e))?;
        Reservation::new(customer_id, apartment_id, period, row.total_price)
            .map_err(|e| serialization(&e))
    }
}

/// Repository for managing reservations
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Creates a new ReservationRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a reservation
    ///
    /// # Errors
    ///
    /// - `DatabaseError::BookingOverlap` if the apartment is already booked
    ///   for any night of the stay
    /// - `DatabaseError::ForeignKeyViolation` if the customer or apartment
    ///   does not exist
    /// - `DatabaseError::DuplicateEntry` if the same customer already holds
    ///   a reservation for this apartment and check-in date
    pub async fn create(&self, reservation: &Reservation) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO reservations \
             (customer_id, apartment_id, start_date, end_date, total_price) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(reservation.customer_id.get())
        .bind(reservation.apartment_id.get())
        .bind(reservation.period.check_in())
        .bind(reservation.period.check_out())
        .bind(reservation.total_price)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Cancels a reservation identified by customer, apartment, and
    /// check-in date
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no matching reservation exists.
    pub async fn cancel(
        &self,
        customer_id: CustomerId,
        apartment_id: ApartmentId,
        check_in: NaiveDate,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "DELETE FROM reservations \
             WHERE customer_id = $1 AND apartment_id = $2 AND start_date = $3",
        )
        .bind(customer_id.get())
        .bind(apartment_id.get())
        .bind(check_in)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!(
                "Reservation for {} at {} starting {} not found",
                customer_id, apartment_id, check_in
            )));
        }
        Ok(())
    }

    /// Retrieves all reservations of a customer, most recent check-in first
    pub async fn find_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Reservation>, DatabaseError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            "SELECT customer_id, apartment_id, start_date, end_date, total_price \
             FROM reservations \
             WHERE customer_id = $1 \
             ORDER BY start_date DESC",
        )
        .bind(customer_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Reservation::try_from).collect()
    }
}
