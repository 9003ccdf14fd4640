use gmk_core::gateways::search::PlaceSearchGateway;

/// Stand-in for the external place-search widget.
///
/// A console run has no persistent input field, so clearing it is a
/// log-only event.
#[derive(Debug, Default)]
pub struct NullPlaceSearch;

impl PlaceSearchGateway for NullPlaceSearch {
    fn clear_input_field(&self) {
        log::debug!("Search input cleared");
    }
}
