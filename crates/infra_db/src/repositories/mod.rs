//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for each part of the rental booking domain. Repositories
//! encapsulate SQL queries and map between database rows and domain types.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - One parameterized SQL statement per operation
//! - Runtime query mapping via `FromRow` row structs
//! - Consistency rules delegated to schema constraints; constraint
//!   violations surface as typed `DatabaseError` variants

pub mod analytics;
pub mod apartments;
pub mod customers;
pub mod owners;
pub mod ownership;
pub mod reservations;
pub mod reviews;

pub use analytics::{AnalyticsRepository, ApartmentRecommendation, MonthlyProfit, OwnerReservationCount};
pub use apartments::ApartmentRepository;
pub use customers::CustomerRepository;
pub use owners::OwnerRepository;
pub use ownership::OwnershipRepository;
pub use reservations::ReservationRepository;
pub use reviews::ReviewRepository;
