//! Stop simulation button component

use crate::plugins::controls::ButtonWithLabel;
use crate::prelude::*;

#[derive(Component, Default)]
pub struct StopSimulationButton;

impl ButtonWithLabel for StopSimulationButton {
    fn command() -> SimulationCommand {
        SimulationCommand::Stop
    }

    fn marker() -> Self {
        Self
    }

    fn base_text() -> &'static str {
        "Stop"
    }

    fn shortcut() -> &'static str {
        "X"
    }
}
