//! Reservation entity
//!
//! A reservation is identified by (customer, apartment, check-in date); a
//! customer may book the same apartment repeatedly over disjoint periods.
//! Overlap between reservations for the same apartment is rejected by the
//! database's range exclusion constraint, not here.

use core_kernel::{ApartmentId, CustomerId, StayPeriod};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RentalError;

/// A customer's reservation of an apartment for a stay period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub customer_id: CustomerId,
    pub apartment_id: ApartmentId,
    pub period: StayPeriod,
    /// Total price for the whole stay
    pub total_price: Decimal,
}

impl Reservation {
    /// Creates a new reservation
    ///
    /// # Errors
    ///
    /// Returns `RentalError::InvalidPrice` if the total price is not positive.
    pub fn new(
        customer_id: CustomerId,
        apartment_id: ApartmentId,
        period: StayPeriod,
        total_price: Decimal,
    ) -> Result<Self, RentalError> {
        if total_price <= Decimal::ZERO {
            return Err(RentalError::InvalidPrice(total_price));
        }
        Ok(Self {
            customer_id,
            apartment_id,
            period,
            total_price,
        })
    }

    /// Average price per night for the stay
    pub fn nightly_rate(&self) -> Decimal {
        // The period guarantees at least one night
        self.total_price / Decimal::from(self.period.nights())
    }
}
