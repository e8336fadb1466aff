//! Core Kernel - Foundational types for the rental booking system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed entity identifiers backed by positive integers
//! - Stay periods for reservation date handling
//! - Common error types

pub mod error;
pub mod identifiers;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{ApartmentId, CustomerId, IdentifierError, OwnerId};
pub use temporal::{StayPeriod, TemporalError};
