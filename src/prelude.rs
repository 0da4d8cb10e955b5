//! Orrery prelude module
//!
//! Re-exports the types used across most plugins to reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;
pub use rand::Rng;

// Internal re-exports - Catalog
pub use crate::catalog::{BodyCatalog, BodyDefinition, BodyId, CatalogError};

// Internal re-exports - Config
pub use crate::config::OrreryConfig;

// Internal re-exports - Events
pub use crate::events::{SelectBody, SimulationCommand};

// Internal re-exports - States
pub use crate::states::AppState;

// Internal re-exports - Resources
pub use crate::resources::{GlobalSimulationRate, OrbitGuideVisibility, SharedRng};
