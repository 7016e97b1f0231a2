//! Port contracts for agent discovery.

mod loader;

pub use loader::{UnitLoadError, UnitLoadResult, UnitLoader};
