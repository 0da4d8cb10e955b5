//! Viewport plugin
//!
//! Keeps the camera's aspect ratio in step with the window.

use crate::plugins::camera::MainCamera;
use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>();
        app.add_event::<WindowResized>();
        app.add_systems(PostStartup, init_viewport_from_primary_window);
        app.add_systems(
            Update,
            handle_window_resized.in_set(SimulationSet::Camera),
        );
    }
}

/// Last known drawable size of the window, in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    /// Stores the new size and returns the aspect ratio to apply.
    ///
    /// A zero-sized (minimised) window keeps the previous size and yields `None`.
    pub fn resize(&mut self, width: f32, height: f32) -> Option<f32> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        self.width = width;
        self.height = height;
        Some(self.aspect_ratio())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

fn init_viewport_from_primary_window(
    window: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    if let Ok(window) = window.single() {
        viewport.resize(window.width(), window.height());
    }
}

fn handle_window_resized(
    mut resize_events: EventReader<WindowResized>,
    mut viewport: ResMut<Viewport>,
    mut projections: Query<&mut Projection, With<MainCamera>>,
) {
    for event in resize_events.read() {
        let Some(aspect_ratio) = viewport.resize(event.width, event.height) else {
            debug!("Ignoring resize to {}x{}", event.width, event.height);
            continue;
        };

        if projections.is_empty() {
            debug!("Window resized before the camera exists");
            continue;
        }

        for mut projection in &mut projections {
            if let Projection::Perspective(perspective) = projection.as_mut() {
                perspective.aspect_ratio = aspect_ratio;
            }
        }
    }
}
