//! Reporting and recommendation queries
//!
//! All aggregation stays in the database: each operation is one SQL
//! statement (CTEs where the original logic needs intermediate relations),
//! and the repository only maps rows to typed results.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use core_kernel::{ApartmentId, CustomerId, OwnerId};
use domain_rental::{Apartment, Customer, Owner};

use crate::error::DatabaseError;
use crate::repositories::apartments::ApartmentRow;
use crate::repositories::customers::CustomerRow;
use crate::repositories::owners::OwnerRow;

/// Platform commission on every reservation (15%)
pub const COMMISSION_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Reservation count for a single owner, including zero-reservation owners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerReservationCount {
    pub owner_id: OwnerId,
    pub owner_name: String,
    pub reservation_count: i64,
}

/// Platform profit for one month of a year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyProfit {
    /// Month number, 1 through 12
    pub month: i32,
    /// Commission earned on reservations ending in the month
    pub profit: Decimal,
}

/// An apartment recommended to a customer with a predicted rating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApartmentRecommendation {
    pub apartment: Apartment,
    /// Predicted rating, clamped to the valid rating range
    pub predicted_rating: Decimal,
}

#[derive(Debug, FromRow)]
struct OwnerCountRow {
    owner_id: i32,
    owner_name: String,
    reservation_count: i64,
}

#[derive(Debug, FromRow)]
struct MonthlyProfitRow {
    month: i32,
    profit: Decimal,
}

#[derive(Debug, FromRow)]
struct RecommendationRow {
    apartment_id: i32,
    address: String,
    city: String,
    country: String,
    size_sqm: i32,
    predicted_rating: Decimal,
}

/// Repository for reporting and recommendation queries
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::AnalyticsRepository;
///
/// let analytics = AnalyticsRepository::new(pool);
/// let rating = analytics.apartment_rating(apartment_id).await?;
/// let profits = analytics.monthly_profit(2024).await?;
/// ```
#[derive(Debug, Clone)]
pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    /// Creates a new AnalyticsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Average rating of an apartment, 0 when it has no reviews
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown apartment.
    pub async fn apartment_rating(
        &self,
        apartment_id: ApartmentId,
    ) -> Result<Decimal, DatabaseError> {
        let rating = sqlx::query_scalar::<_, Decimal>(
            "SELECT avg_rating FROM apartment_ratings WHERE apartment_id = $1",
        )
        .bind(apartment_id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Apartment", apartment_id))?;

        Ok(rating)
    }

    /// Average of the per-apartment average ratings over an owner's
    /// apartments, 0 when the owner has no rated apartments
    pub async fn owner_rating(&self, owner_id: OwnerId) -> Result<Decimal, DatabaseError> {
        let rating = sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(AVG(ar.avg_rating), 0) \
             FROM ownerships w \
             JOIN apartment_ratings ar ON ar.apartment_id = w.apartment_id \
             WHERE w.owner_id = $1",
        )
        .bind(owner_id.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(rating)
    }

    /// The customer with the most reservations, ties broken by smallest
    /// customer id; `None` when there are no reservations
    pub async fn top_customer(&self) -> Result<Option<Customer>, DatabaseError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT c.customer_id, c.customer_name \
             FROM customers c \
             WHERE c.customer_id = ( \
                 SELECT customer_id FROM reservations \
                 GROUP BY customer_id \
                 ORDER BY COUNT(*) DESC, customer_id ASC \
                 LIMIT 1 \
             )",
        )
        .fetch_optional(&self.pool)
        .await?;

        row.map(Customer::try_from).transpose()
    }

    /// Reservation counts per owner over their apartments, including owners
    /// with no apartments or no reservations, ordered by owner id
    pub async fn reservation_counts_per_owner(
        &self,
    ) -> Result<Vec<OwnerReservationCount>, DatabaseError> {
        let rows = sqlx::query_as::<_, OwnerCountRow>(
            "SELECT o.owner_id, o.owner_name, \
                    COUNT(r.customer_id) AS reservation_count \
             FROM owners o \
             LEFT JOIN ownerships w ON w.owner_id = o.owner_id \
             LEFT JOIN reservations r ON r.apartment_id = w.apartment_id \
             GROUP BY o.owner_id, o.owner_name \
             ORDER BY o.owner_id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let owner_id = OwnerId::new(row.owner_id)
                    .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
                Ok(OwnerReservationCount {
                    owner_id,
                    owner_name: row.owner_name,
                    reservation_count: row.reservation_count,
                })
            })
            .collect()
    }

    /// Owners with at least one apartment in every (city, country) present
    /// on the platform, ordered by owner id
    pub async fn find_omnipresent_owners(&self) -> Result<Vec<Owner>, DatabaseError> {
        let rows = sqlx::query_as::<_, OwnerRow>(
            "SELECT o.owner_id, o.owner_name \
             FROM owners o \
             WHERE EXISTS ( \
                 SELECT 1 FROM ownerships w WHERE w.owner_id = o.owner_id \
             ) \
             AND NOT EXISTS ( \
                 SELECT 1 \
                 FROM (SELECT DISTINCT city, country FROM apartments) loc \
                 WHERE NOT EXISTS ( \
                     SELECT 1 \
                     FROM ownerships w \
                     JOIN apartments a ON a.apartment_id = w.apartment_id \
                     WHERE w.owner_id = o.owner_id \
                       AND a.city = loc.city \
                       AND a.country = loc.country \
                 ) \
             ) \
             ORDER BY o.owner_id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Owner::try_from).collect()
    }

    /// The apartment with the best ratio of average rating to average
    /// nightly cost, over apartments that have been reserved at least once;
    /// `None` when there are no reservations
    ///
    /// Unreviewed apartments count with rating 0. Ties break by smallest
    /// apartment id.
    pub async fn best_value_apartment(&self) -> Result<Option<Apartment>, DatabaseError> {
        let row = sqlx::query_as::<_, ApartmentRow>(
            "WITH nightly_costs AS ( \
                 SELECT apartment_id, \
                        AVG(total_price / (end_date - start_date)) AS nightly_cost \
                 FROM reservations \
                 GROUP BY apartment_id \
             ), \
             ratings AS ( \
                 SELECT apartment_id, AVG(rating) AS avg_rating \
                 FROM reviews \
                 GROUP BY apartment_id \
             ) \
             SELECT a.apartment_id, a.address, a.city, a.country, a.size_sqm \
             FROM nightly_costs c \
             LEFT JOIN ratings r ON r.apartment_id = c.apartment_id \
             JOIN apartments a ON a.apartment_id = c.apartment_id \
             ORDER BY COALESCE(r.avg_rating, 0) / c.nightly_cost DESC, a.apartment_id \
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        row.map(Apartment::try_from).transpose()
    }

    /// Commission earned per month of a year, always 12 rows
    ///
    /// A reservation counts toward the month its stay ends in.
    pub async fn monthly_profit(&self, year: i32) -> Result<Vec<MonthlyProfit>, DatabaseError> {
        let rows = sqlx::query_as::<_, MonthlyProfitRow>(
            "SELECT m.month::INT AS month, \
                    ($2::NUMERIC * COALESCE(SUM(r.total_price), 0))::NUMERIC AS profit \
             FROM generate_series(1, 12) AS m(month) \
             LEFT JOIN reservations r \
                    ON EXTRACT(MONTH FROM r.end_date) = m.month \
                   AND EXTRACT(YEAR FROM r.end_date) = $1 \
             GROUP BY m.month \
             ORDER BY m.month",
        )
        .bind(year)
        .bind(COMMISSION_RATE)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| MonthlyProfit {
                month: row.month,
                profit: row.profit,
            })
            .collect())
    }

    /// Recommends unreviewed apartments to a customer with predicted ratings
    ///
    /// Collaborative filtering on review ratios: for each peer who reviewed
    /// an apartment the customer also reviewed, take the average ratio of
    /// the customer's rating to the peer's. A peer's rating of an apartment
    /// the customer has not seen, scaled by that ratio and clamped to the
    /// valid rating range, predicts the customer's rating; predictions are
    /// averaged per apartment and sorted best-first.
    ///
    /// Customers with no reviews, or no rating overlap with anyone, get an
    /// empty list.
    pub async fn recommend_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<ApartmentRecommendation>, DatabaseError> {
        let rows = sqlx::query_as::<_, RecommendationRow>(
            "WITH my_reviews AS ( \
                 SELECT apartment_id, rating FROM reviews WHERE customer_id = $1 \
             ), \
             peer_ratios AS ( \
                 SELECT r.customer_id, \
                        AVG(m.rating::NUMERIC / r.rating::NUMERIC) AS ratio \
                 FROM reviews r \
                 JOIN my_reviews m ON m.apartment_id = r.apartment_id \
                 WHERE r.customer_id <> $1 \
                 GROUP BY r.customer_id \
             ), \
             predictions AS ( \
                 SELECT r.apartment_id, \
                        AVG(LEAST(GREATEST(p.ratio * r.rating, 1), 10)) AS predicted_rating \
                 FROM reviews r \
                 JOIN peer_ratios p ON p.customer_id = r.customer_id \
                 WHERE r.apartment_id NOT IN (SELECT apartment_id FROM my_reviews) \
                 GROUP BY r.apartment_id \
             ) \
             SELECT a.apartment_id, a.address, a.city, a.country, a.size_sqm, \
                    p.predicted_rating \
             FROM predictions p \
             JOIN apartments a ON a.apartment_id = p.apartment_id \
             ORDER BY p.predicted_rating DESC, a.apartment_id",
        )
        .bind(customer_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let apartment = Apartment::try_from(ApartmentRow {
                    apartment_id: row.apartment_id,
                    address: row.address,
                    city: row.city,
                    country: row.country,
                    size_sqm: row.size_sqm,
                })?;
                Ok(ApartmentRecommendation {
                    apartment,
                    predicted_rating: row.predicted_rating,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_commission_rate_is_fifteen_percent() {
        assert_eq!(COMMISSION_RATE, dec!(0.15));
    }
}
