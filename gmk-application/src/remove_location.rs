use super::*;

/// Removes the first location matching the given coordinates, together
/// with its marker, and persists the shrunken snapshot.
///
/// Returns whether a removal occurred. When nothing matched, nothing is
/// persisted either — the snapshot is unchanged.
pub fn remove_location(ctx: &mut AppContext, lat: f64, lng: f64) -> Result<bool> {
    match usecases::remove_location(&mut ctx.registry, lat, lng)? {
        Some(pos) => {
            ctx.persist();
            ctx.markers.remove(&*ctx.map, pos);
            ctx.render_sidebar();
            Ok(true)
        }
        None => {
            debug!("No saved location at {lat},{lng}");
            Ok(false)
        }
    }
}
