//! Integration tests for the repository layer
//!
//! Each test spins up its own PostgreSQL container and applies the real
//! schema, so constraint behavior (duplicates, cascades, booking overlap)
//! is exercised exactly as in production.
//!
//! The tests are ignored by default because they need a local Docker
//! daemon; run them with `cargo test -p infra_db -- --ignored`.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{ApartmentId, CustomerId, OwnerId};
use domain_rental::{Apartment, Customer, Owner, Rating};
use infra_db::{
    AnalyticsRepository, ApartmentRepository, CustomerRepository, DatabaseError, OwnerRepository,
    OwnershipRepository, ReservationRepository, ReviewRepository,
};
use test_utils::{
    assert_decimal_approx_eq, assert_full_year, assert_predicted_rating_in_range,
    create_isolated_test_database, ReservationBuilder, ReviewBuilder,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn owner(raw_id: i32, name: &str) -> Owner {
    Owner::new(OwnerId::new(raw_id).unwrap(), name).unwrap()
}

fn customer(raw_id: i32, name: &str) -> Customer {
    Customer::new(CustomerId::new(raw_id).unwrap(), name).unwrap()
}

fn apartment(raw_id: i32, address: &str, city: &str, country: &str) -> Apartment {
    Apartment::new(ApartmentId::new(raw_id).unwrap(), address, city, country, 60).unwrap()
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_owner_crud_roundtrip() {
    let db = create_isolated_test_database().await.unwrap();
    let repo = OwnerRepository::new(db.pool().clone());

    let noga = owner(1, "Noga Levy");
    repo.insert(&noga).await.unwrap();

    let fetched = repo.get_by_id(noga.id).await.unwrap();
    assert_eq!(fetched, noga);

    // Same id again is a duplicate
    let result = repo.insert(&owner(1, "Somebody Else")).await;
    assert!(matches!(result, Err(DatabaseError::DuplicateEntry(_))));

    repo.delete(noga.id).await.unwrap();
    assert!(repo.get_by_id(noga.id).await.unwrap_err().is_not_found());

    // Deleting twice reports the missing row
    assert!(repo.delete(noga.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_apartment_natural_key_is_unique() {
    let db = create_isolated_test_database().await.unwrap();
    let apartments = ApartmentRepository::new(db.pool().clone());
    let customers = CustomerRepository::new(db.pool().clone());

    apartments
        .insert(&apartment(1, "5 Herzl St", "Tel Aviv", "Israel"))
        .await
        .unwrap();

    // Different id, same address triple
    let result = apartments
        .insert(&apartment(2, "5 Herzl St", "Tel Aviv", "Israel"))
        .await;
    assert!(matches!(result, Err(DatabaseError::DuplicateEntry(_))));

    // Customers live in their own table and id space
    customers.insert(&customer(1, "Dana Cohen")).await.unwrap();
    let fetched = customers
        .get_by_id(CustomerId::new(1).unwrap())
        .await
        .unwrap();
    assert_eq!(fetched.name, "Dana Cohen");
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_ownership_links() {
    let db = create_isolated_test_database().await.unwrap();
    let owners = OwnerRepository::new(db.pool().clone());
    let apartments = ApartmentRepository::new(db.pool().clone());
    let ownership = OwnershipRepository::new(db.pool().clone());

    let noga = owner(1, "Noga Levy");
    let flat_a = apartment(10, "5 Herzl St", "Tel Aviv", "Israel");
    let flat_b = apartment(11, "12 HaNamal St", "Haifa", "Israel");
    owners.insert(&noga).await.unwrap();
    apartments.insert(&flat_a).await.unwrap();
    apartments.insert(&flat_b).await.unwrap();

    // Linking to a missing owner or apartment hits the foreign keys
    let result = ownership
        .assign(OwnerId::new(99).unwrap(), flat_a.id)
        .await;
    assert!(matches!(result, Err(DatabaseError::ForeignKeyViolation(_))));

    ownership.assign(noga.id, flat_a.id).await.unwrap();
    ownership.assign(noga.id, flat_b.id).await.unwrap();

    // An apartment has at most one owner
    let rival = owner(2, "Avi Mizrahi");
    owners.insert(&rival).await.unwrap();
    let result = ownership.assign(rival.id, flat_a.id).await;
    assert!(matches!(result, Err(DatabaseError::DuplicateEntry(_))));

    assert_eq!(ownership.owner_of(flat_a.id).await.unwrap(), noga);

    let listed = ownership.apartments_of(noga.id).await.unwrap();
    assert_eq!(listed, vec![flat_a.clone(), flat_b.clone()]);

    ownership.release(noga.id, flat_a.id).await.unwrap();
    assert!(ownership
        .owner_of(flat_a.id)
        .await
        .unwrap_err()
        .is_not_found());

    // Releasing a link that is not there
    assert!(ownership
        .release(rival.id, flat_b.id)
        .await
        .unwrap_err()
        .is_not_found());

    // Deleting the owner cascades away the remaining link, not the apartment
    owners.delete(noga.id).await.unwrap();
    assert!(ownership
        .owner_of(flat_b.id)
        .await
        .unwrap_err()
        .is_not_found());
    assert!(apartments.get_by_id(flat_b.id).await.is_ok());
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_reservation_overlap_rules() {
    let db = create_isolated_test_database().await.unwrap();
    let customers = CustomerRepository::new(db.pool().clone());
    let apartments = ApartmentRepository::new(db.pool().clone());
    let reservations = ReservationRepository::new(db.pool().clone());

    let dana = customer(1, "Dana Cohen");
    let omer = customer(2, "Omer Katz");
    let flat = apartment(10, "5 Herzl St", "Tel Aviv", "Israel");
    customers.insert(&dana).await.unwrap();
    customers.insert(&omer).await.unwrap();
    apartments.insert(&flat).await.unwrap();

    let booking = ReservationBuilder::new()
        .with_customer(dana.id)
        .with_apartment(flat.id)
        .with_stay(date(2024, 7, 1), date(2024, 7, 8))
        .with_price(dec!(1400))
        .build();
    reservations.create(&booking).await.unwrap();

    // A different customer sharing any night is rejected by the engine
    let clash = ReservationBuilder::new()
        .with_customer(omer.id)
        .with_apartment(flat.id)
        .with_stay(date(2024, 7, 5), date(2024, 7, 12))
        .build();
    assert!(matches!(
        reservations.create(&clash).await,
        Err(DatabaseError::BookingOverlap(_))
    ));

    // Back-to-back is fine: stays are half-open
    let back_to_back = ReservationBuilder::new()
        .with_customer(omer.id)
        .with_apartment(flat.id)
        .with_stay(date(2024, 7, 8), date(2024, 7, 15))
        .build();
    reservations.create(&back_to_back).await.unwrap();

    // Unknown apartment hits the foreign key
    let ghost = ReservationBuilder::new()
        .with_customer(dana.id)
        .with_apartment(ApartmentId::new(99).unwrap())
        .with_stay(date(2024, 9, 1), date(2024, 9, 3))
        .build();
    assert!(matches!(
        reservations.create(&ghost).await,
        Err(DatabaseError::ForeignKeyViolation(_))
    ));

    let danas = reservations.find_for_customer(dana.id).await.unwrap();
    assert_eq!(danas, vec![booking.clone()]);

    reservations
        .cancel(dana.id, flat.id, date(2024, 7, 1))
        .await
        .unwrap();
    assert!(reservations
        .cancel(dana.id, flat.id, date(2024, 7, 1))
        .await
        .unwrap_err()
        .is_not_found());

    // The freed week can be booked again
    let rebooked = ReservationBuilder::new()
        .with_customer(omer.id)
        .with_apartment(flat.id)
        .with_stay(date(2024, 7, 1), date(2024, 7, 8))
        .build();
    reservations.create(&rebooked).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_review_rules() {
    let db = create_isolated_test_database().await.unwrap();
    let customers = CustomerRepository::new(db.pool().clone());
    let apartments = ApartmentRepository::new(db.pool().clone());
    let reservations = ReservationRepository::new(db.pool().clone());
    let reviews = ReviewRepository::new(db.pool().clone());

    let dana = customer(1, "Dana Cohen");
    let flat = apartment(10, "5 Herzl St", "Tel Aviv", "Israel");
    customers.insert(&dana).await.unwrap();
    apartments.insert(&flat).await.unwrap();

    // Dated exactly on the check-out day, the earliest allowed date
    let review = ReviewBuilder::new()
        .with_customer(dana.id)
        .with_apartment(flat.id)
        .with_date(date(2024, 7, 8))
        .with_rating(8)
        .build();

    // No completed stay yet
    assert!(reviews.add(&review).await.unwrap_err().is_not_found());

    reservations
        .create(
            &ReservationBuilder::new()
                .with_customer(dana.id)
                .with_apartment(flat.id)
                .with_stay(date(2024, 7, 1), date(2024, 7, 8))
                .build(),
        )
        .await
        .unwrap();

    // A review dated mid-stay is still too early
    let early = ReviewBuilder::new()
        .with_customer(dana.id)
        .with_apartment(flat.id)
        .with_date(date(2024, 7, 5))
        .build();
    assert!(reviews.add(&early).await.unwrap_err().is_not_found());

    reviews.add(&review).await.unwrap();

    // One review per (customer, apartment)
    assert!(matches!(
        reviews.add(&review).await,
        Err(DatabaseError::DuplicateEntry(_))
    ));

    // Updates only move forward in time
    assert!(reviews
        .update(dana.id, flat.id, date(2024, 7, 7), Rating::new(3).unwrap(), "revised")
        .await
        .unwrap_err()
        .is_not_found());

    // An update dated the same day as the stored review is allowed
    reviews
        .update(
            dana.id,
            flat.id,
            date(2024, 7, 8),
            Rating::new(5).unwrap(),
            "Second thoughts on the same day.",
        )
        .await
        .unwrap();

    reviews
        .update(
            dana.id,
            flat.id,
            date(2024, 8, 15),
            Rating::new(9).unwrap(),
            "Even better on reflection.",
        )
        .await
        .unwrap();

    let stored = reviews.get(dana.id, flat.id).await.unwrap();
    assert_eq!(stored.rating.get(), 9);
    assert_eq!(stored.review_date, date(2024, 8, 15));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_rating_analytics() {
    let db = create_isolated_test_database().await.unwrap();
    let owners = OwnerRepository::new(db.pool().clone());
    let customers = CustomerRepository::new(db.pool().clone());
    let apartments = ApartmentRepository::new(db.pool().clone());
    let ownership = OwnershipRepository::new(db.pool().clone());
    let reservations = ReservationRepository::new(db.pool().clone());
    let reviews = ReviewRepository::new(db.pool().clone());
    let analytics = AnalyticsRepository::new(db.pool().clone());

    let noga = owner(1, "Noga Levy");
    let dana = customer(1, "Dana Cohen");
    let omer = customer(2, "Omer Katz");
    let rated = apartment(10, "5 Herzl St", "Tel Aviv", "Israel");
    let unrated = apartment(11, "12 HaNamal St", "Haifa", "Israel");

    owners.insert(&noga).await.unwrap();
    customers.insert(&dana).await.unwrap();
    customers.insert(&omer).await.unwrap();
    apartments.insert(&rated).await.unwrap();
    apartments.insert(&unrated).await.unwrap();
    ownership.assign(noga.id, rated.id).await.unwrap();
    ownership.assign(noga.id, unrated.id).await.unwrap();

    // Unknown apartment is an error, unreviewed apartment rates 0
    assert!(analytics
        .apartment_rating(ApartmentId::new(99).unwrap())
        .await
        .unwrap_err()
        .is_not_found());
    assert_eq!(analytics.apartment_rating(rated.id).await.unwrap(), dec!(0));

    // Two completed stays, two reviews: 4 and 6
    for (guest, check_in, check_out, rating) in [
        (&dana, date(2024, 6, 1), date(2024, 6, 8), 4),
        (&omer, date(2024, 6, 10), date(2024, 6, 17), 6),
    ] {
        reservations
            .create(
                &ReservationBuilder::new()
                    .with_customer(guest.id)
                    .with_apartment(rated.id)
                    .with_stay(check_in, check_out)
                    .build(),
            )
            .await
            .unwrap();
        reviews
            .add(
                &ReviewBuilder::new()
                    .with_customer(guest.id)
                    .with_apartment(rated.id)
                    .with_date(date(2024, 8, 1))
                    .with_rating(rating)
                    .build(),
            )
            .await
            .unwrap();
    }

    assert_eq!(analytics.apartment_rating(rated.id).await.unwrap(), dec!(5));

    // Owner average spans rated (5) and unrated (0) apartments
    assert_decimal_approx_eq(
        analytics.owner_rating(noga.id).await.unwrap(),
        dec!(2.5),
        dec!(0.0001),
    );

    // An owner with no apartments rates 0
    let idle = owner(2, "Avi Mizrahi");
    owners.insert(&idle).await.unwrap();
    assert_eq!(analytics.owner_rating(idle.id).await.unwrap(), dec!(0));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_reporting_analytics() {
    let db = create_isolated_test_database().await.unwrap();
    let owners = OwnerRepository::new(db.pool().clone());
    let customers = CustomerRepository::new(db.pool().clone());
    let apartments = ApartmentRepository::new(db.pool().clone());
    let ownership = OwnershipRepository::new(db.pool().clone());
    let reservations = ReservationRepository::new(db.pool().clone());
    let analytics = AnalyticsRepository::new(db.pool().clone());

    // No data yet
    assert_eq!(analytics.top_customer().await.unwrap(), None);
    assert_eq!(analytics.best_value_apartment().await.unwrap(), None);
    assert!(analytics.find_omnipresent_owners().await.unwrap().is_empty());

    let noga = owner(1, "Noga Levy");
    let avi = owner(2, "Avi Mizrahi");
    let dana = customer(1, "Dana Cohen");
    let omer = customer(2, "Omer Katz");
    let tlv = apartment(10, "5 Herzl St", "Tel Aviv", "Israel");
    let haifa = apartment(11, "12 HaNamal St", "Haifa", "Israel");
    let tlv_b = apartment(12, "7 Dizengoff St", "Tel Aviv", "Israel");

    owners.insert(&noga).await.unwrap();
    owners.insert(&avi).await.unwrap();
    customers.insert(&dana).await.unwrap();
    customers.insert(&omer).await.unwrap();
    for flat in [&tlv, &haifa, &tlv_b] {
        apartments.insert(flat).await.unwrap();
    }

    // Noga covers both locations; Avi only Tel Aviv
    ownership.assign(noga.id, tlv.id).await.unwrap();
    ownership.assign(noga.id, haifa.id).await.unwrap();
    ownership.assign(avi.id, tlv_b.id).await.unwrap();

    let omnipresent = analytics.find_omnipresent_owners().await.unwrap();
    assert_eq!(omnipresent, vec![noga.clone()]);

    // Dana books twice (both in Noga's flats), Omer once
    for (guest, flat, check_in, check_out, price) in [
        (&dana, &tlv, date(2024, 3, 1), date(2024, 3, 8), dec!(700)),
        (&dana, &haifa, date(2024, 3, 10), date(2024, 3, 17), dec!(1400)),
        (&omer, &tlv_b, date(2024, 3, 1), date(2024, 3, 11), dec!(3000)),
    ] {
        reservations
            .create(
                &ReservationBuilder::new()
                    .with_customer(guest.id)
                    .with_apartment(flat.id)
                    .with_stay(check_in, check_out)
                    .with_price(price)
                    .build(),
            )
            .await
            .unwrap();
    }

    assert_eq!(analytics.top_customer().await.unwrap(), Some(dana.clone()));

    let counts = analytics.reservation_counts_per_owner().await.unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].owner_id, noga.id);
    assert_eq!(counts[0].reservation_count, 2);
    assert_eq!(counts[1].owner_id, avi.id);
    assert_eq!(counts[1].reservation_count, 1);

    // Without reviews every reserved apartment rates 0; cheapest nightly
    // rate wins on ties broken by id. tlv: 100/night, haifa: 200/night,
    // tlv_b: 300/night -> all ratios are 0, smallest id first.
    let best = analytics.best_value_apartment().await.unwrap();
    assert_eq!(best, Some(tlv.clone()));

    // Commission: March ends all three stays, 15% of 5100 = 765
    let profits = analytics.monthly_profit(2024).await.unwrap();
    assert_full_year(&profits);
    assert_eq!(profits[2].month, 3);
    assert_eq!(profits[2].profit, dec!(765));
    assert_eq!(profits[0].profit, dec!(0));

    // Other years earn nothing
    let empty_year = analytics.monthly_profit(2023).await.unwrap();
    assert_full_year(&empty_year);
    assert!(empty_year.iter().all(|entry| entry.profit == dec!(0)));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_top_customer_tie_breaks_by_smallest_id() {
    let db = create_isolated_test_database().await.unwrap();
    let customers = CustomerRepository::new(db.pool().clone());
    let apartments = ApartmentRepository::new(db.pool().clone());
    let reservations = ReservationRepository::new(db.pool().clone());
    let analytics = AnalyticsRepository::new(db.pool().clone());

    let dana = customer(1, "Dana Cohen");
    let omer = customer(2, "Omer Katz");
    let flat = apartment(10, "5 Herzl St", "Tel Aviv", "Israel");
    customers.insert(&dana).await.unwrap();
    customers.insert(&omer).await.unwrap();
    apartments.insert(&flat).await.unwrap();

    // One reservation each, the higher id booked first
    for (guest, check_in, check_out) in [
        (&omer, date(2024, 4, 1), date(2024, 4, 8)),
        (&dana, date(2024, 4, 10), date(2024, 4, 17)),
    ] {
        reservations
            .create(
                &ReservationBuilder::new()
                    .with_customer(guest.id)
                    .with_apartment(flat.id)
                    .with_stay(check_in, check_out)
                    .build(),
            )
            .await
            .unwrap();
    }

    // Equal counts: the smaller customer id wins regardless of booking order
    assert_eq!(analytics.top_customer().await.unwrap(), Some(dana.clone()));

    // A second booking for Omer breaks the tie outright
    reservations
        .create(
            &ReservationBuilder::new()
                .with_customer(omer.id)
                .with_apartment(flat.id)
                .with_stay(date(2024, 4, 20), date(2024, 4, 27))
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(analytics.top_customer().await.unwrap(), Some(omer.clone()));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_recommendation_analytics() {
    let db = create_isolated_test_database().await.unwrap();
    let customers = CustomerRepository::new(db.pool().clone());
    let apartments = ApartmentRepository::new(db.pool().clone());
    let reservations = ReservationRepository::new(db.pool().clone());
    let reviews = ReviewRepository::new(db.pool().clone());
    let analytics = AnalyticsRepository::new(db.pool().clone());

    let dana = customer(1, "Dana Cohen");
    let omer = customer(2, "Omer Katz");
    let shared = apartment(10, "5 Herzl St", "Tel Aviv", "Israel");
    let unseen = apartment(11, "12 HaNamal St", "Haifa", "Israel");

    customers.insert(&dana).await.unwrap();
    customers.insert(&omer).await.unwrap();
    apartments.insert(&shared).await.unwrap();
    apartments.insert(&unseen).await.unwrap();

    // Stays so reviews are allowed (disjoint periods per apartment)
    for (guest, flat, check_in, check_out) in [
        (&dana, &shared, date(2024, 5, 1), date(2024, 5, 8)),
        (&omer, &shared, date(2024, 5, 10), date(2024, 5, 17)),
        (&omer, &unseen, date(2024, 6, 1), date(2024, 6, 8)),
    ] {
        reservations
            .create(
                &ReservationBuilder::new()
                    .with_customer(guest.id)
                    .with_apartment(flat.id)
                    .with_stay(check_in, check_out)
                    .build(),
            )
            .await
            .unwrap();
    }

    // Dana rates the shared flat 8, Omer rates it 4: Dana scores twice as
    // high as Omer. Omer gave the unseen flat a 6, so Dana's predicted
    // rating is clamp(2.0 * 6) = 10.
    for (guest, flat, rating) in [(&dana, &shared, 8), (&omer, &shared, 4), (&omer, &unseen, 6)] {
        reviews
            .add(
                &ReviewBuilder::new()
                    .with_customer(guest.id)
                    .with_apartment(flat.id)
                    .with_date(date(2024, 8, 1))
                    .with_rating(rating)
                    .build(),
            )
            .await
            .unwrap();
    }

    let recommendations = analytics.recommend_for_customer(dana.id).await.unwrap();
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].apartment, unseen);
    assert_eq!(recommendations[0].predicted_rating, dec!(10));
    assert_predicted_rating_in_range(recommendations[0].predicted_rating);

    // A customer with no reviews gets nothing
    let cold_start = analytics.recommend_for_customer(omer.id).await.unwrap();
    // Omer reviewed everything there is, so nothing is left to recommend
    assert!(cold_start.is_empty());

    let newcomer = customer(3, "Maya Peretz");
    customers.insert(&newcomer).await.unwrap();
    let empty = analytics.recommend_for_customer(newcomer.id).await.unwrap();
    assert!(empty.is_empty());
}
