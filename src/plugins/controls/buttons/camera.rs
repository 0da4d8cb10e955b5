//! Camera reset button component

use crate::plugins::controls::ButtonWithLabel;
use crate::prelude::*;

#[derive(Component, Default)]
pub struct ResetCameraButton;

impl ButtonWithLabel for ResetCameraButton {
    fn command() -> SimulationCommand {
        SimulationCommand::ResetCamera
    }

    fn marker() -> Self {
        Self
    }

    fn base_text() -> &'static str {
        "Reset Camera"
    }

    fn shortcut() -> &'static str {
        "R"
    }
}
