use super::*;

/// Adds a location, persists the new snapshot and brings both
/// projections up to date. The viewport recenters onto the new entry.
pub fn add_location(ctx: &mut AppContext, new: usecases::NewLocation) -> Result<Location> {
    let location = usecases::add_location(&mut ctx.registry, new)?;
    ctx.persist();
    ctx.markers.sync(&*ctx.map, ctx.registry.all());
    ctx.markers.focus(&*ctx.map, location.pos);
    ctx.render_sidebar();
    Ok(location)
}
