//! Pause/resume button component

use crate::plugins::controls::ButtonWithLabel;
use crate::plugins::controls::builder::set_button_label;
use crate::prelude::*;

#[derive(Component, Default)]
pub struct PauseButton;

impl ButtonWithLabel for PauseButton {
    fn command() -> SimulationCommand {
        SimulationCommand::TogglePause
    }

    fn marker() -> Self {
        Self
    }

    fn base_text() -> &'static str {
        "Pause"
    }

    fn shortcut() -> &'static str {
        "Space"
    }
}

pub fn pause_label(state: &AppState) -> &'static str {
    match state {
        AppState::Paused => "Resume (Space)",
        _ => "Pause (Space)",
    }
}

pub fn sync_pause_button_text(
    state: Res<State<AppState>>,
    mut initialized: Local<bool>,
    button_children_query: Query<&Children, With<PauseButton>>,
    mut text_query: Query<&mut Text>,
) {
    // Sync on first run or when state changes
    if !*initialized || state.is_changed() {
        *initialized = true;
        set_button_label(&button_children_query, &mut text_query, pause_label(state.get()));
    }
}
