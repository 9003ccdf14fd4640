use super::prelude::*;

/// Removes the first location matching the given coordinates.
///
/// Returns the removed position, or `None` if nothing matched. The
/// coordinates are parsed with the same rules as on add, so removal and
/// addition can never disagree about equality.
pub fn remove_location(
    registry: &mut LocationRegistry,
    lat: f64,
    lng: f64,
) -> Result<Option<MapPoint>> {
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)?;
    Ok(registry.remove(pos).then_some(pos))
}
