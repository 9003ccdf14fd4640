use crate::projections::sidebar::SidebarEntry;

/// Render target for the saved-locations list.
///
/// Receives the complete view model on every registry change and replaces
/// whatever was displayed before; no incremental updates.
pub trait SidebarGateway {
    fn render(&self, entries: &[SidebarEntry]);
}
