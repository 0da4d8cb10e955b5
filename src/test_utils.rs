//! Test utilities for plugin testing

use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput, NativeKeyCode};
use bevy::prelude::*;

use crate::plugins::selection::Selection;
use crate::prelude::*;

/// Creates a minimal test app with core Bevy plugins needed for testing
pub fn create_test_app() -> App {
    let mut app = App::new();

    // Add minimal plugins needed for testing
    app.add_plugins((
        MinimalPlugins,
        bevy::asset::AssetPlugin::default(),
        bevy::input::InputPlugin,
        bevy::state::app::StatesPlugin,
        bevy::transform::TransformPlugin,
    ));

    // Initialize assets needed by various plugins
    app.init_asset::<bevy::text::Font>();
    app.init_asset::<bevy::image::Image>();
    app.init_asset::<bevy::render::mesh::Mesh>();
    app.init_asset::<bevy::render::prelude::Shader>();
    app.init_asset::<bevy::pbr::StandardMaterial>();

    // Add events used by plugins
    app.add_event::<SimulationCommand>();
    app.add_event::<SelectBody>();

    // Add states
    app.init_state::<AppState>();

    app
}

/// Creates a test app that already carries the default catalog and an empty selection
pub fn create_test_app_with_catalog() -> App {
    let mut app = create_test_app();
    app.insert_resource(BodyCatalog::default());
    app.init_resource::<Selection>();
    app
}

/// Helper to deliver a pressed logical key, as the window backend would
pub fn press_logical_key(app: &mut App, key: Key) {
    let window = app.world_mut().spawn_empty().id();
    app.world_mut().send_event(KeyboardInput {
        key_code: KeyCode::Unidentified(NativeKeyCode::Unidentified),
        logical_key: key,
        state: ButtonState::Pressed,
        text: None,
        repeat: false,
        window,
    });
}
