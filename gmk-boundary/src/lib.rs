//! # gmk-boundary
//!
//! Serializable, anemic data structures describing GeoMarks data at its
//! external boundaries. The persisted store snapshot and the export
//! artifact share this one schema.

use serde::{Deserialize, Serialize};

/// File name of the export artifact.
pub const EXPORT_FILE_NAME: &str = "saved_locations.json";

/// Media type of both the persisted snapshot and the export artifact.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// One persisted saved location.
///
/// The durable key and the export artifact both hold a JSON array of
/// these records, insertion-order preserved.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLocation {
    pub lat         : f64,
    pub lng         : f64,
    pub description : String,
}

#[cfg(feature = "entity-conversions")]
mod conv;
