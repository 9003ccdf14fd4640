use super::prelude::*;

/// Validates an export request and returns the snapshot to serialize.
///
/// An empty registry is a user-visible business failure, not a crash:
/// nothing is produced and the caller surfaces the notice.
pub fn export_locations(registry: &LocationRegistry) -> Result<Vec<Location>> {
    if registry.is_empty() {
        return Err(Error::EmptyRegistry);
    }
    Ok(registry.all().to_vec())
}
