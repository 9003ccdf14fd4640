//! # gmk-gateways
//!
//! Concrete adapters for the gateway traits of `gmk-core`, targeting a
//! console environment: the map widget is rendered into the log, the
//! sidebar onto stdout, and the confirmation gate onto the terminal.

pub mod confirm;
pub mod console;
pub mod search;
