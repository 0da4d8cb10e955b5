//! Simulation plugin - Self-contained plugin pattern
//!
//! Builds the solar system from the body catalog, advances every orbit once per
//! frame and owns the scene lifecycle (pause, stop, restart).

use crate::prelude::*;

mod actions;
pub mod clock;
pub mod components;
pub mod scene;

use actions::{
    build_scene, handle_rate_commands, handle_restart_simulation_event,
    handle_stop_simulation_event, handle_toggle_orbit_guides_event,
    handle_toggle_pause_simulation_event, teardown_scene, update_orbit_guide_visibility,
};
use clock::advance_orbits;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Simulation,
    Camera,
    UI,
}

pub struct SimulationPlugin {
    config: OrreryConfig,
    catalog: BodyCatalog,
}

impl SimulationPlugin {
    /// `catalog` must already be validated, which `BodyCatalog` guarantees by construction.
    pub fn new(config: OrreryConfig, catalog: BodyCatalog) -> Self {
        Self { config, catalog }
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new(OrreryConfig::default(), BodyCatalog::default())
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        app.insert_resource(config.clone());
        app.insert_resource(self.catalog.clone());
        app.insert_resource(SharedRng::from_optional_seed(config.simulation.initial_seed));
        app.insert_resource(GlobalSimulationRate(config.simulation.global_rate));
        app.insert_resource(OrbitGuideVisibility {
            enabled: config.scene.show_orbit_guides,
        });
        app.insert_resource(AmbientLight {
            color: Color::srgb_u8(0x40, 0x40, 0x40),
            brightness: config.scene.ambient_brightness,
            ..default()
        });

        app.init_state::<AppState>();
        app.add_event::<SimulationCommand>();

        app.configure_sets(
            Update,
            (
                SimulationSet::Input,
                SimulationSet::Simulation,
                SimulationSet::Camera,
                SimulationSet::UI,
            )
                .chain(),
        );

        app.add_systems(Startup, build_scene);
        app.add_systems(OnEnter(AppState::Stopped), teardown_scene);

        app.add_systems(
            Update,
            (
                handle_restart_simulation_event,
                handle_toggle_pause_simulation_event,
                handle_stop_simulation_event,
                handle_rate_commands,
                handle_toggle_orbit_guides_event,
            )
                .in_set(SimulationSet::Input),
        );
        app.add_systems(
            Update,
            advance_orbits
                .in_set(SimulationSet::Simulation)
                .run_if(in_state(AppState::Running)),
        );
        app.add_systems(
            Update,
            update_orbit_guide_visibility.in_set(SimulationSet::UI),
        );
    }
}
