//! # gmk-core
//!
//! Domain core of GeoMarks: the authoritative location registry, the
//! storage and gateway abstractions, and the usecases that mutate or
//! query the registry. Everything visual or durable is reached through
//! a trait defined here and implemented elsewhere.

pub mod entities {
    pub use gmk_entities::{geo::*, location::*, marker::*};
}

pub mod gateways;
pub mod projections;
pub mod registry;
pub mod repositories;
pub mod usecases;
