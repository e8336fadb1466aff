//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the rental
//! booking system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{ApartmentId, CustomerId, OwnerId, StayPeriod};
use domain_rental::{Apartment, Customer, Owner};

/// Fixture for entity identifiers
pub struct IdFixtures;

impl IdFixtures {
    pub fn owner_id() -> OwnerId {
        OwnerId::new(1).unwrap()
    }

    pub fn other_owner_id() -> OwnerId {
        OwnerId::new(2).unwrap()
    }

    pub fn customer_id() -> CustomerId {
        CustomerId::new(10).unwrap()
    }

    pub fn other_customer_id() -> CustomerId {
        CustomerId::new(11).unwrap()
    }

    pub fn apartment_id() -> ApartmentId {
        ApartmentId::new(100).unwrap()
    }

    pub fn other_apartment_id() -> ApartmentId {
        ApartmentId::new(101).unwrap()
    }
}

/// Fixture for owners and customers
pub struct PartyFixtures;

impl PartyFixtures {
    /// A standard owner
    pub fn owner() -> Owner {
        Owner::new(IdFixtures::owner_id(), "Noga Levy").unwrap()
    }

    /// A second, distinct owner
    pub fn other_owner() -> Owner {
        Owner::new(IdFixtures::other_owner_id(), "Avi Mizrahi").unwrap()
    }

    /// A standard customer
    pub fn customer() -> Customer {
        Customer::new(IdFixtures::customer_id(), "Dana Cohen").unwrap()
    }

    /// A second, distinct customer
    pub fn other_customer() -> Customer {
        Customer::new(IdFixtures::other_customer_id(), "Omer Katz").unwrap()
    }
}

/// Fixture for apartments
pub struct ApartmentFixtures;

impl ApartmentFixtures {
    /// A standard city-center apartment
    pub fn city_center() -> Apartment {
        Apartment::new(
            IdFixtures::apartment_id(),
            "5 Herzl St",
            "Tel Aviv",
            "Israel",
            72,
        )
        .unwrap()
    }

    /// An apartment in a different city
    pub fn seaside() -> Apartment {
        Apartment::new(
            IdFixtures::other_apartment_id(),
            "12 HaNamal St",
            "Haifa",
            "Israel",
            95,
        )
        .unwrap()
    }

    /// An apartment abroad, for multi-location scenarios
    pub fn abroad() -> Apartment {
        Apartment::new(
            ApartmentId::new(102).unwrap(),
            "3 Rue de Rivoli",
            "Paris",
            "France",
            40,
        )
        .unwrap()
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard week-long summer stay (Jul 1 - Jul 8, 2024)
    pub fn summer_week() -> StayPeriod {
        StayPeriod::new(Self::date(2024, 7, 1), Self::date(2024, 7, 8)).unwrap()
    }

    /// A stay overlapping the summer week
    pub fn overlapping_summer_week() -> StayPeriod {
        StayPeriod::new(Self::date(2024, 7, 5), Self::date(2024, 7, 12)).unwrap()
    }

    /// A stay starting exactly when the summer week ends
    pub fn after_summer_week() -> StayPeriod {
        StayPeriod::new(Self::date(2024, 7, 8), Self::date(2024, 7, 15)).unwrap()
    }

    /// A date after all fixture stays have ended
    pub fn review_day() -> NaiveDate {
        Self::date(2024, 8, 1)
    }

    /// Shorthand for building dates in tests
    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}
