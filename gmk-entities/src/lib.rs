#![deny(missing_debug_implementations)]

//! # gmk-entities
//!
//! Reusable, agnostic domain entities for GeoMarks.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod geo;
pub mod location;
pub mod marker;
