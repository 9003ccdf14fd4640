// Low-level storage access traits.
// The persistent store holds a full serialized snapshot of the saved
// locations under a single durable key, never the live object graph.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait LocationRepo {
    /// Loads the persisted snapshot.
    ///
    /// Implementations fail soft on a missing key or malformed content:
    /// both degrade to an empty sequence instead of an error, so a corrupt
    /// store can never prevent startup.
    fn load_locations(&self) -> Result<Vec<Location>>;

    /// Overwrites the durable key with a full snapshot.
    fn save_locations(&self, locations: &[Location]) -> Result<()>;

    /// Removes the durable key entirely.
    ///
    /// Distinct from saving an empty snapshot: afterwards the store holds
    /// "no data", not "empty data". Removing an absent key succeeds.
    fn delete_locations(&self) -> Result<()>;
}
