use super::prelude::*;

/// A location as submitted from the outside, before validation.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub lat: f64,
    pub lng: f64,
    pub description: String,
}

/// Appends a new location to the registry.
///
/// The raw coordinates are parsed here, at the registry boundary; a
/// non-finite value is rejected before anything is stored or projected.
/// Duplicate positions are not an error.
pub fn add_location(registry: &mut LocationRegistry, new: NewLocation) -> Result<Location> {
    let NewLocation {
        lat,
        lng,
        description,
    } = new;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)?;
    let location = registry.add(pos, description.into());
    log::debug!("Added location \"{}\" at {}", location.description, pos);
    Ok(location)
}
