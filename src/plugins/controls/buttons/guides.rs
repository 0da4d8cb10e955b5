//! Orbit guide toggle button component

use crate::plugins::controls::ButtonWithLabel;
use crate::plugins::controls::builder::set_button_label;
use crate::prelude::*;

#[derive(Component, Default)]
pub struct OrbitGuideToggleButton;

impl ButtonWithLabel for OrbitGuideToggleButton {
    fn command() -> SimulationCommand {
        SimulationCommand::ToggleOrbitGuides
    }

    fn marker() -> Self {
        Self
    }

    fn base_text() -> &'static str {
        "Hide Orbits"
    }

    fn shortcut() -> &'static str {
        "G"
    }
}

pub fn sync_orbit_guide_button_text(
    guides: Res<OrbitGuideVisibility>,
    mut initialized: Local<bool>,
    button_children_query: Query<&Children, With<OrbitGuideToggleButton>>,
    mut text_query: Query<&mut Text>,
) {
    if !*initialized || guides.is_changed() {
        *initialized = true;

        let text_str = if guides.enabled {
            "Hide Orbits (G)"
        } else {
            "Show Orbits (G)"
        };

        set_button_label(&button_children_query, &mut text_query, text_str);
    }
}
