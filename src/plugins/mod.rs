//! Self-contained plugins, one per concern

pub mod camera;
pub mod controls;
pub mod info_panel;
pub mod selection;
pub mod simulation;
pub mod textures;
pub mod viewport;
