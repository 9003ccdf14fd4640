use super::{add_location::add_location, *};

/// Handles a selection coming in from the external address search.
///
/// The user is asked to confirm before anything is committed. On
/// confirmation the regular add flow runs and the search input is
/// cleared; on decline nothing happened yet, so nothing needs to be
/// rolled back.
pub fn handle_place_selection(
    ctx: &mut AppContext,
    selection: SelectedPlace,
    confirm: &dyn ConfirmationGateway,
    search: &dyn PlaceSearchGateway,
) -> Result<Option<Location>> {
    let SelectedPlace {
        lat,
        lng,
        formatted_address,
    } = selection;
    let prompt = format!("Add \"{formatted_address}\" to your saved locations?");
    if !confirm.confirm(&prompt) {
        info!("Saving \"{formatted_address}\" declined");
        return Ok(None);
    }
    let location = add_location(
        ctx,
        usecases::NewLocation {
            lat,
            lng,
            description: formatted_address,
        },
    )?;
    search.clear_input_field();
    Ok(Some(location))
}
