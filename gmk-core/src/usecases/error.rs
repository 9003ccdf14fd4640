use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid position")]
    InvalidPosition,
    #[error("There are no saved locations")]
    EmptyRegistry,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<gmk_entities::geo::InvalidCoordinateError> for Error {
    fn from(_: gmk_entities::geo::InvalidCoordinateError) -> Self {
        Self::InvalidPosition
    }
}
