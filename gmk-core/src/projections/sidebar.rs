use crate::entities::*;

/// One row of the saved-locations list.
///
/// The centering and removal actions offered next to each row are
/// dispatched by the rendering collaborator using `pos`; the view model
/// itself carries no callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarEntry {
    pub label: String,
    pub pos: MapPoint,
}

/// Pure render: registry snapshot in, complete view model out.
///
/// Recomputed on every registry change; at the expected data scale (tens
/// to low hundreds of entries) diffing would not pay for itself.
pub fn sidebar_view(snapshot: &[Location]) -> Vec<SidebarEntry> {
    snapshot
        .iter()
        .map(|location| SidebarEntry {
            label: location.description.to_string(),
            pos: location.pos,
        })
        .collect()
}
