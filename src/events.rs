//! Centralized event definitions
//!
//! Events are the only way input reaches the simulation: keyboard shortcuts,
//! control buttons and mesh clicks are all translated into one of these.

use crate::catalog::BodyId;
use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationCommand {
    Restart,
    TogglePause,
    Stop,
    SpeedUp,
    SlowDown,
    ResetSpeed,
    ToggleOrbitGuides,
    ResetCamera,
    #[cfg(not(target_arch = "wasm32"))]
    Quit,
}

/// Request to change the selected body. `None` clears the selection.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectBody(pub Option<BodyId>);
