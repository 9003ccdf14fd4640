use std::fmt;

use uuid::Uuid;

use crate::geo::MapPoint;

/// Opaque handle identifying a single marker on the map widget.
///
/// Handles are issued by the widget when a marker is created and are only
/// ever compared or passed back, never interpreted.
#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MarkerHandle(String);

impl MarkerHandle {
    pub fn new() -> Self {
        Uuid::new_v4().into()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Uuid> for MarkerHandle {
    fn from(from: Uuid) -> Self {
        Self(from.as_simple().to_string())
    }
}

impl From<String> for MarkerHandle {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for MarkerHandle {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<MarkerHandle> for String {
    fn from(from: MarkerHandle) -> Self {
        from.0
    }
}

impl fmt::Display for MarkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// A marker currently placed on the map, mirroring one saved location.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub handle: MarkerHandle,
    pub pos: MapPoint,
}
