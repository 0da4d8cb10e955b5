//! Action handlers for simulation commands
//!
//! Restart, pause/resume, stop and the global rate knob.

use super::components::{OrbitGuide, SceneEntity};
use super::scene::{SceneBuilder, spawn_scene};
use crate::prelude::*;

/// Builds the scene from the catalog and starts the frame loop.
#[allow(clippy::too_many_arguments)]
pub fn build_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    mut rng: ResMut<SharedRng>,
    catalog: Res<BodyCatalog>,
    config: Res<OrreryConfig>,
    guides: Res<OrbitGuideVisibility>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let plan = SceneBuilder::new(&config.scene).build(&catalog, &mut rng);
    spawn_scene(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &plan,
        &config.scene,
        guides.enabled,
    );
    info!("Built scene with {} orbiting bodies", plan.bodies.len());

    next_state.set(if config.simulation.start_paused {
        AppState::Paused
    } else {
        AppState::Running
    });
}

#[allow(clippy::too_many_arguments)]
pub fn handle_restart_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut commands: Commands,
    scene_entities: Query<Entity, (With<SceneEntity>, Without<ChildOf>)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    mut rng: ResMut<SharedRng>,
    catalog: Res<BodyCatalog>,
    config: Res<OrreryConfig>,
    guides: Res<OrbitGuideVisibility>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    // Drain the whole frame so several restarts still rebuild a single scene
    let restarts = commands_reader
        .read()
        .filter(|command| matches!(command, SimulationCommand::Restart))
        .count();
    if restarts == 0 {
        return;
    }

    scene_entities.iter().for_each(|entity| {
        commands.entity(entity).despawn();
    });

    // A seeded run restarts into the same layout
    *rng = SharedRng::from_optional_seed(config.simulation.initial_seed);

    let plan = SceneBuilder::new(&config.scene).build(&catalog, &mut rng);
    spawn_scene(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &plan,
        &config.scene,
        guides.enabled,
    );
    info!("Restarted simulation");

    next_state.set(AppState::Running);
}

pub fn handle_toggle_pause_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::TogglePause) {
            continue;
        }
        match current_state.get() {
            AppState::Running => next_state.set(AppState::Paused),
            AppState::Paused => next_state.set(AppState::Running),
            state => debug!("Ignoring pause toggle in {:?}", state),
        }
    }
}

pub fn handle_stop_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for command in commands_reader.read() {
        if matches!(command, SimulationCommand::Stop) && current_state.has_scene() {
            next_state.set(AppState::Stopped);
        }
    }
}

/// Removes every scene entity once the loop has stopped.
pub fn teardown_scene(
    mut commands: Commands,
    scene_entities: Query<Entity, (With<SceneEntity>, Without<ChildOf>)>,
) {
    let mut count = 0;
    for entity in &scene_entities {
        commands.entity(entity).despawn();
        count += 1;
    }
    info!("Simulation stopped, removed {} scene entities", count);
}

pub fn handle_rate_commands(
    mut commands_reader: EventReader<SimulationCommand>,
    mut rate: ResMut<GlobalSimulationRate>,
    config: Res<OrreryConfig>,
) {
    let step = config.simulation.rate_step;
    let limit = config.simulation.rate_limit;

    for command in commands_reader.read() {
        match command {
            SimulationCommand::SpeedUp => rate.adjust(step, limit),
            SimulationCommand::SlowDown => rate.adjust(-step, limit),
            SimulationCommand::ResetSpeed => **rate = config.simulation.global_rate,
            _ => continue,
        }
        info!("Global simulation rate set to {:.4}", **rate);
    }
}

pub fn handle_toggle_orbit_guides_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut guides: ResMut<OrbitGuideVisibility>,
) {
    for command in commands_reader.read() {
        if matches!(command, SimulationCommand::ToggleOrbitGuides) {
            guides.enabled = !guides.enabled;
            info!(
                "Orbit guides {}",
                if guides.enabled { "shown" } else { "hidden" }
            );
        }
    }
}

pub fn update_orbit_guide_visibility(
    guides: Res<OrbitGuideVisibility>,
    mut guide_query: Query<&mut Visibility, With<OrbitGuide>>,
) {
    if !guides.is_changed() {
        return;
    }

    for mut visibility in &mut guide_query {
        *visibility = if guides.enabled {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
