use std::{
    fs,
    path::{Path, PathBuf},
};

use gmk_boundary::{SavedLocation, EXPORT_FILE_NAME};

use super::*;

/// Serializes the current registry snapshot into a downloadable JSON
/// artifact.
///
/// The artifact uses the exact schema of the persisted snapshot, pretty
/// printed. An empty registry aborts before anything is written, so no
/// partial file is ever produced.
pub fn export_locations(ctx: &AppContext, path: Option<&Path>) -> Result<PathBuf> {
    let locations = usecases::export_locations(&ctx.registry)?;
    let records: Vec<SavedLocation> = locations.into_iter().map(Into::into).collect();
    let json = serde_json::to_string_pretty(&records)?;
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    fs::write(&path, json)?;
    info!(
        "Exported {} saved locations to {}",
        records.len(),
        path.display()
    );
    Ok(path)
}
