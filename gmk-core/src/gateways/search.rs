/// A place picked in the external address-search widget.
///
/// Raw numbers as emitted by the widget; they are parsed into a
/// validated position exactly once, at the usecase boundary.
#[derive(Debug, Clone)]
pub struct SelectedPlace {
    pub lat: f64,
    pub lng: f64,
    pub formatted_address: String,
}

/// Capabilities of the external place-search widget.
pub trait PlaceSearchGateway {
    /// Clears the address input field after a selection was committed.
    fn clear_input_field(&self);
}
