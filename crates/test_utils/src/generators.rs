//! Property-Based Test Data Generators
//!
//! Provides proptest strategies and fake-data helpers for generating random
//! test data that maintains domain invariants.

use chrono::{Duration, NaiveDate};
use core_kernel::{ApartmentId, CustomerId, OwnerId, StayPeriod};
use domain_rental::{Apartment, Customer, Owner, Rating};
use fake::faker::address::en::{CityName, CountryName, StreetName};
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid raw identifier values
pub fn raw_id_strategy() -> impl Strategy<Value = i32> {
    1i32..1_000_000
}

/// Strategy for generating valid owner ids
pub fn owner_id_strategy() -> impl Strategy<Value = OwnerId> {
    raw_id_strategy().prop_map(|raw| OwnerId::new(raw).unwrap())
}

/// Strategy for generating valid customer ids
pub fn customer_id_strategy() -> impl Strategy<Value = CustomerId> {
    raw_id_strategy().prop_map(|raw| CustomerId::new(raw).unwrap())
}

/// Strategy for generating valid apartment ids
pub fn apartment_id_strategy() -> impl Strategy<Value = ApartmentId> {
    raw_id_strategy().prop_map(|raw| ApartmentId::new(raw).unwrap())
}

/// Strategy for generating valid ratings
pub fn rating_strategy() -> impl Strategy<Value = Rating> {
    (Rating::MIN..=Rating::MAX).prop_map(|value| Rating::new(value).unwrap())
}

/// Strategy for generating valid stay periods up to 90 nights,
/// starting within a few years of 2020
pub fn stay_period_strategy() -> impl Strategy<Value = StayPeriod> {
    (0i64..2000, 1i64..90).prop_map(|(offset, nights)| {
        let check_in = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset);
        StayPeriod::new(check_in, check_in + Duration::days(nights)).unwrap()
    })
}

/// Strategy for generating positive total prices with two decimal places
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
    (100i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Creates an owner with a random realistic name
pub fn fake_owner(id: OwnerId) -> Owner {
    Owner::new(id, Name().fake::<String>()).unwrap()
}

/// Creates a customer with a random realistic name
pub fn fake_customer(id: CustomerId) -> Customer {
    Customer::new(id, Name().fake::<String>()).unwrap()
}

/// Creates an apartment with a random realistic address
pub fn fake_apartment(id: ApartmentId) -> Apartment {
    let street: String = StreetName().fake();
    let number: u16 = (1..200u16).fake();
    Apartment::new(
        id,
        format!("{} {}", number, street),
        CityName().fake::<String>(),
        CountryName().fake::<String>(),
        (20..300i32).fake(),
    )
    .unwrap()
}
