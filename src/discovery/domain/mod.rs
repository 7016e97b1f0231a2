//! Domain types for agent discovery.

mod unit;

pub use unit::{SourceUnit, UnitExports, UnitId};
