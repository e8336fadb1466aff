//! Rental booking domain
//!
//! This crate defines the business entities of the apartment-rental booking
//! system: owners, customers, apartments, ownership links, reservations, and
//! reviews. Entities validate their own invariants at construction; cross-row
//! consistency (double-booking, review-after-stay, referential integrity) is
//! enforced by the database layer in `infra_db`.

pub mod apartment;
pub mod customer;
pub mod error;
pub mod owner;
pub mod reservation;
pub mod review;

pub use apartment::{Apartment, Location};
pub use customer::Customer;
pub use error::RentalError;
pub use owner::Owner;
pub use reservation::Reservation;
pub use review::{Rating, Review};
