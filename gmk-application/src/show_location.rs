use super::*;

/// Opens the info popup for the marker at the given coordinates.
///
/// Returns whether a matching marker existed. The popup content is the
/// saved location itself; formatting is up to the map widget.
pub fn show_location_details(ctx: &AppContext, lat: f64, lng: f64) -> Result<bool> {
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).map_err(usecases::Error::from)?;
    let Some(handle) = ctx.markers.handle_at(pos) else {
        return Ok(false);
    };
    let Some(location) = ctx.registry.all().iter().find(|loc| loc.pos == pos) else {
        // A marker without a registry entry would be a projection leak.
        warn!("Marker at {pos} has no saved location");
        return Ok(false);
    };
    ctx.map.show_location_popup(handle, location);
    Ok(true)
}
