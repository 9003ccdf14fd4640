//! # gmk-db-jfs
//!
//! Durable storage backend for the location registry, backed by a
//! [`jfs`] JSON file store. The whole registry is persisted as a full
//! snapshot under one durable key; the key maps to a single JSON file
//! holding an array of [`SavedLocation`] records.

use std::{io, path::Path};

use jfs::Store;

use gmk_boundary::SavedLocation;
use gmk_core::{
    entities::Location,
    repositories::{Error as RepoError, LocationRepo},
};

type Result<T> = std::result::Result<T, RepoError>;

/// The single durable key. Materializes as `<data_dir>/saved_locations.json`.
pub const SAVED_LOCATIONS_KEY: &str = "saved_locations";

pub struct JfsLocationStore {
    json_store: Store,
}

impl JfsLocationStore {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

impl LocationRepo for JfsLocationStore {
    fn load_locations(&self) -> Result<Vec<Location>> {
        let records: Vec<SavedLocation> = match self.json_store.get(SAVED_LOCATIONS_KEY) {
            Ok(records) => records,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                // Fail soft: a store that cannot be read degrades to
                // "no saved locations" instead of an error.
                log::warn!("Unable to read saved locations ({err}), treating store as empty");
                return Ok(Vec::new());
            }
        };
        let locations = records
            .into_iter()
            .filter_map(|record| match Location::try_from(record) {
                Ok(location) => Some(location),
                Err(err) => {
                    log::warn!("Skipping invalid saved location: {err}");
                    None
                }
            })
            .collect();
        Ok(locations)
    }

    fn save_locations(&self, locations: &[Location]) -> Result<()> {
        let records: Vec<SavedLocation> = locations
            .iter()
            .map(|location| SavedLocation::from(location.clone()))
            .collect();
        self.json_store.save_with_id(&records, SAVED_LOCATIONS_KEY)?;
        Ok(())
    }

    fn delete_locations(&self) -> Result<()> {
        match self.json_store.delete(SAVED_LOCATIONS_KEY) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
