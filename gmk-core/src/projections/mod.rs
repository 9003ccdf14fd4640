// Derived, recomputable views of the registry. Projections are kept in
// sync with the registry but are never a source of truth.

pub mod markers;
pub mod sidebar;
