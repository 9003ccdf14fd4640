use crate::entities::*;

/// Capabilities of the external map widget.
///
/// The widget owns the visual marker objects; the core only holds the
/// opaque handles it returns. Marker-click wiring stays with the widget.
pub trait MapWidgetGateway {
    /// Places a marker and returns the widget's handle for it.
    fn create_marker(&self, pos: MapPoint, label: &str) -> MarkerHandle;

    fn destroy_marker(&self, handle: &MarkerHandle);

    /// Recenters and zooms the visible map region.
    fn set_viewport(&self, center: MapPoint, zoom: ZoomLevel);

    /// Opens an info popup attached to the given marker.
    fn show_location_popup(&self, handle: &MarkerHandle, location: &Location);
}
