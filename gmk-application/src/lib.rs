//! # gmk-application
//!
//! Flows that orchestrate the location-registry usecases with their
//! persistence and projection side effects. One flow runs per external
//! event and runs to completion, side effects included, before the next
//! event is handled.

#[macro_use]
extern crate log;

mod add_location;
mod clear_locations;
mod context;
mod export_locations;
mod place_selection;
mod remove_location;
mod show_location;

pub mod prelude {
    pub use super::{
        add_location::*, clear_locations::*, context::*, export_locations::*, place_selection::*,
        remove_location::*, show_location::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use self::context::AppContext;
pub(crate) use gmk_core::{
    entities::*,
    gateways::{
        confirm::ConfirmationGateway,
        map::MapWidgetGateway,
        search::{PlaceSearchGateway, SelectedPlace},
        sidebar::SidebarGateway,
    },
    projections::{markers::MarkerProjection, sidebar::sidebar_view},
    registry::LocationRegistry,
    repositories::LocationRepo,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;
