use super::*;

/// Empties the registry, removes the durable key and destroys every
/// marker. Afterwards the store holds no data at all, not an empty
/// snapshot.
pub fn clear_locations(ctx: &mut AppContext) {
    ctx.registry.clear();
    if let Err(err) = ctx.store.delete_locations() {
        error!("Failed to clear persisted locations: {err}");
    }
    ctx.markers.clear(&*ctx.map);
    ctx.render_sidebar();
}
