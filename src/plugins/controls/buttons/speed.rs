//! Global rate buttons

use crate::plugins::controls::ButtonWithLabel;
use crate::prelude::*;

#[derive(Component, Default)]
pub struct SpeedUpButton;

impl ButtonWithLabel for SpeedUpButton {
    fn command() -> SimulationCommand {
        SimulationCommand::SpeedUp
    }

    fn marker() -> Self {
        Self
    }

    fn base_text() -> &'static str {
        "Faster"
    }

    fn shortcut() -> &'static str {
        "+"
    }
}

#[derive(Component, Default)]
pub struct SlowDownButton;

impl ButtonWithLabel for SlowDownButton {
    fn command() -> SimulationCommand {
        SimulationCommand::SlowDown
    }

    fn marker() -> Self {
        Self
    }

    fn base_text() -> &'static str {
        "Slower"
    }

    fn shortcut() -> &'static str {
        "-"
    }
}
