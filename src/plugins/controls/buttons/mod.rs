mod bodies;
mod camera;
pub mod guides;
pub mod pause;
#[cfg(not(target_arch = "wasm32"))]
mod quit;
mod restart;
mod speed;
mod stop;

pub use bodies::*;
pub use camera::ResetCameraButton;
pub use guides::*;
pub use pause::PauseButton;
#[cfg(not(target_arch = "wasm32"))]
pub use quit::QuitButton;
pub use restart::RestartSimulationButton;
pub use speed::{SlowDownButton, SpeedUpButton};
pub use stop::StopSimulationButton;
