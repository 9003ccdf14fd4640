use gmk_entities as e;

use super::*;

use e::geo::{InvalidCoordinateError, MapPoint};

impl From<e::location::Location> for SavedLocation {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location { pos, description } = from;
        Self {
            lat: pos.lat().to_deg(),
            lng: pos.lng().to_deg(),
            description: description.into(),
        }
    }
}

impl TryFrom<SavedLocation> for e::location::Location {
    type Error = InvalidCoordinateError;

    fn try_from(from: SavedLocation) -> Result<Self, Self::Error> {
        let SavedLocation {
            lat,
            lng,
            description,
        } = from;
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng)?;
        Ok(Self {
            pos,
            description: description.into(),
        })
    }
}
