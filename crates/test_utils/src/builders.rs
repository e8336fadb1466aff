//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. Tests specify only the relevant fields and take defaults for
//! everything else.

use chrono::NaiveDate;
use core_kernel::{ApartmentId, CustomerId, StayPeriod};
use domain_rental::{Apartment, Rating, Reservation, Review};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{IdFixtures, TemporalFixtures};

/// Builder for constructing test apartments
pub struct ApartmentBuilder {
    id: ApartmentId,
    address: String,
    city: String,
    country: String,
    size_sqm: i32,
}

impl Default for ApartmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApartmentBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: IdFixtures::apartment_id(),
            address: "5 Herzl St".to_string(),
            city: "Tel Aviv".to_string(),
            country: "Israel".to_string(),
            size_sqm: 72,
        }
    }

    pub fn with_id(mut self, id: ApartmentId) -> Self {
        self.id = id;
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_size(mut self, size_sqm: i32) -> Self {
        self.size_sqm = size_sqm;
        self
    }

    /// Builds the apartment, panicking on invalid test data
    pub fn build(self) -> Apartment {
        Apartment::new(self.id, self.address, self.city, self.country, self.size_sqm)
            .expect("invalid test apartment")
    }
}

/// Builder for constructing test reservations
pub struct ReservationBuilder {
    customer_id: CustomerId,
    apartment_id: ApartmentId,
    period: StayPeriod,
    total_price: Decimal,
}

impl Default for ReservationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            customer_id: IdFixtures::customer_id(),
            apartment_id: IdFixtures::apartment_id(),
            period: TemporalFixtures::summer_week(),
            total_price: dec!(1400),
        }
    }

    pub fn with_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = customer_id;
        self
    }

    pub fn with_apartment(mut self, apartment_id: ApartmentId) -> Self {
        self.apartment_id = apartment_id;
        self
    }

    pub fn with_period(mut self, period: StayPeriod) -> Self {
        self.period = period;
        self
    }

    pub fn with_stay(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.period = StayPeriod::new(check_in, check_out).expect("invalid test stay");
        self
    }

    pub fn with_price(mut self, total_price: Decimal) -> Self {
        self.total_price = total_price;
        self
    }

    /// Builds the reservation, panicking on invalid test data
    pub fn build(self) -> Reservation {
        Reservation::new(
            self.customer_id,
            self.apartment_id,
            self.period,
            self.total_price,
        )
        .expect("invalid test reservation")
    }
}

/// Builder for constructing test reviews
pub struct ReviewBuilder {
    customer_id: CustomerId,
    apartment_id: ApartmentId,
    review_date: NaiveDate,
    rating: Rating,
    text: String,
}

impl Default for ReviewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            customer_id: IdFixtures::customer_id(),
            apartment_id: IdFixtures::apartment_id(),
            review_date: TemporalFixtures::review_day(),
            rating: Rating::new(8).unwrap(),
            text: "Lovely stay, would book again.".to_string(),
        }
    }

    pub fn with_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = customer_id;
        self
    }

    pub fn with_apartment(mut self, apartment_id: ApartmentId) -> Self {
        self.apartment_id = apartment_id;
        self
    }

    pub fn with_date(mut self, review_date: NaiveDate) -> Self {
        self.review_date = review_date;
        self
    }

    pub fn with_rating(mut self, rating: i16) -> Self {
        self.rating = Rating::new(rating).expect("invalid test rating");
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builds the review, panicking on invalid test data
    pub fn build(self) -> Review {
        Review::new(
            self.customer_id,
            self.apartment_id,
            self.review_date,
            self.rating,
            self.text,
        )
        .expect("invalid test review")
    }
}
