use bevy::prelude::*;

/// Lifecycle of the scene. `Uninitialized` until the scene is built, then the
/// frame loop runs until a stop tears the scene down.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Uninitialized,
    Running,
    Paused,
    Stopped,
}

impl AppState {
    /// True when scene entities exist.
    pub fn has_scene(&self) -> bool {
        matches!(self, AppState::Running | AppState::Paused)
    }
}
