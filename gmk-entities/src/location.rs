use std::fmt;

use crate::geo::MapPoint;

/// Fallback label for locations saved without a description.
pub const DEFAULT_DESCRIPTION: &str = "Untitled";

/// Display label of a saved location.
///
/// Empty or whitespace-only input normalizes to [`DEFAULT_DESCRIPTION`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for Description {
    fn default() -> Self {
        Self(DEFAULT_DESCRIPTION.to_string())
    }
}

impl From<String> for Description {
    fn from(from: String) -> Self {
        let trimmed = from.trim();
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_string())
        }
    }
}

impl From<&str> for Description {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<Description> for String {
    fn from(from: Description) -> Self {
        from.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// A saved location: the unit that is persisted.
///
/// The position serves as the de-facto identity key.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub pos: MapPoint,
    pub description: Description,
}
