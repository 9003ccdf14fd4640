mod add_location;
mod error;
mod export_locations;
mod load_locations;
mod remove_location;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_location::*, error::Error, export_locations::*, load_locations::*, remove_location::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, registry::LocationRegistry, repositories::*};
}
