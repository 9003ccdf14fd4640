use crate::{entities::*, gateways::map::MapWidgetGateway};

/// Zoom level used when focusing a single location.
pub const FOCUS_ZOOM: ZoomLevel = ZoomLevel::new(15);

/// Mirror of the registry on the map widget: one marker per saved
/// location, no leaks, no duplicates.
///
/// The association from location to marker is by position, using the same
/// exact equality as registry removal. Duplicate registry positions each
/// keep a marker of their own.
#[derive(Debug, Default)]
pub struct MarkerProjection {
    markers: Vec<Marker>,
}

impl MarkerProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles the marker set against a registry snapshot.
    ///
    /// Locations without a marker get one created, markers without a
    /// location are destroyed. The viewport is never touched here;
    /// recentering is reserved for the live-add path so that hydrating
    /// persisted entries at startup cannot move the map.
    pub fn sync(&mut self, map: &dyn MapWidgetGateway, snapshot: &[Location]) {
        let mut unmatched: Vec<&Location> = snapshot.iter().collect();
        self.markers.retain(|marker| {
            if let Some(idx) = unmatched.iter().position(|loc| loc.pos == marker.pos) {
                unmatched.remove(idx);
                true
            } else {
                map.destroy_marker(&marker.handle);
                false
            }
        });
        for location in unmatched {
            let handle = map.create_marker(location.pos, location.description.as_str());
            self.markers.push(Marker {
                handle,
                pos: location.pos,
            });
        }
    }

    /// Recenters and zooms the viewport onto a position.
    ///
    /// Pure side-effecting command, no marker changes.
    pub fn focus(&self, map: &dyn MapWidgetGateway, pos: MapPoint) {
        map.set_viewport(pos, FOCUS_ZOOM);
    }

    /// Destroys the first marker whose position matches exactly.
    ///
    /// Must stay consistent with `LocationRegistry::remove`: a removal
    /// that succeeds in one and fails in the other is a defect.
    pub fn remove(&mut self, map: &dyn MapWidgetGateway, pos: MapPoint) -> bool {
        match self.markers.iter().position(|marker| marker.pos == pos) {
            Some(idx) => {
                let marker = self.markers.remove(idx);
                map.destroy_marker(&marker.handle);
                true
            }
            None => false,
        }
    }

    /// Destroys all markers unconditionally.
    pub fn clear(&mut self, map: &dyn MapWidgetGateway) {
        for marker in self.markers.drain(..) {
            map.destroy_marker(&marker.handle);
        }
    }

    pub fn handle_at(&self, pos: MapPoint) -> Option<&MarkerHandle> {
        self.markers
            .iter()
            .find(|marker| marker.pos == pos)
            .map(|marker| &marker.handle)
    }

    pub fn positions(&self) -> impl Iterator<Item = MapPoint> + '_ {
        self.markers.iter().map(|marker| marker.pos)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
