use crate::entities::*;

/// Authoritative, insertion-ordered collection of saved locations.
///
/// All mutations of the saved-locations state go through this type; the
/// map markers and the sidebar list are projections derived from it.
///
/// Positions act as de-facto identity keys but are not unique: adding the
/// same position twice is permitted. Removal therefore only ever affects
/// the first matching entry, which keeps it deterministic under
/// duplicates.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_locations(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Appends a new location and returns it.
    pub fn add(&mut self, pos: MapPoint, description: Description) -> Location {
        let location = Location { pos, description };
        self.locations.push(location.clone());
        location
    }

    /// Removes the first location whose position matches exactly.
    ///
    /// Returns whether a removal occurred.
    pub fn remove(&mut self, pos: MapPoint) -> bool {
        match self.locations.iter().position(|loc| loc.pos == pos) {
            Some(idx) => {
                self.locations.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.locations.clear();
    }

    /// Read-only snapshot in insertion order.
    pub fn all(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
