use gmk_core::{
    gateways::{map::MapWidgetGateway, sidebar::SidebarGateway},
    projections::sidebar::SidebarEntry,
};
use gmk_entities::{
    geo::{MapPoint, ZoomLevel},
    location::Location,
    marker::MarkerHandle,
};

/// Headless map widget reporting every operation through the log.
///
/// Marker handles are minted here, as a real widget would.
#[derive(Debug, Default)]
pub struct ConsoleMapWidget;

impl MapWidgetGateway for ConsoleMapWidget {
    fn create_marker(&self, pos: MapPoint, label: &str) -> MarkerHandle {
        let handle = MarkerHandle::new();
        log::info!("Marker {handle} created at {pos}: {label}");
        handle
    }

    fn destroy_marker(&self, handle: &MarkerHandle) {
        log::info!("Marker {handle} removed");
    }

    fn set_viewport(&self, center: MapPoint, zoom: ZoomLevel) {
        log::info!("Viewport centered at {center} (zoom {zoom})");
    }

    fn show_location_popup(&self, _handle: &MarkerHandle, location: &Location) {
        println!("{}", location.description);
        println!("Latitude: {}", location.pos.lat().to_deg());
        println!("Longitude: {}", location.pos.lng().to_deg());
    }
}

/// Saved-locations list rendered onto stdout.
#[derive(Debug, Default)]
pub struct ConsoleSidebar;

impl SidebarGateway for ConsoleSidebar {
    fn render(&self, entries: &[SidebarEntry]) {
        if entries.is_empty() {
            println!("No saved locations.");
            return;
        }
        println!("Saved locations:");
        for entry in entries {
            println!("  {} ({})", entry.label, entry.pos);
        }
    }
}
