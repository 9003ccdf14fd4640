use super::prelude::*;

/// Hydrates the registry from the persisted snapshot at startup.
///
/// Fails open: whatever the store cannot deliver degrades to an empty
/// registry with a logged warning. A corrupt store must reduce to "no
/// saved locations", never to a failed startup.
pub fn load_locations<R: LocationRepo + ?Sized>(repo: &R) -> LocationRegistry {
    let locations = repo.load_locations().unwrap_or_else(|err| {
        log::warn!("Failed to load saved locations, starting empty: {err}");
        Vec::new()
    });
    LocationRegistry::from_locations(locations)
}
