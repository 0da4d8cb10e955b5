use bevy::log::{Level, LogPlugin};
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCameraPlugin;
use clap::Parser;

use orrery::cli::{self, Args};
use orrery::plugins::camera::CameraPlugin;
use orrery::plugins::controls::ControlsPlugin;
use orrery::plugins::info_panel::InfoPanelPlugin;
use orrery::plugins::selection::SelectionPlugin;
use orrery::plugins::simulation::SimulationPlugin;
use orrery::plugins::textures::TexturePlugin;
use orrery::plugins::viewport::ViewportPlugin;

fn main() -> AppExit {
    let args = Args::parse();

    if let Some(path) = &args.write_default_config {
        return match cli::handle_write_default_config(path) {
            Ok(()) => AppExit::Success,
            Err(err) => {
                eprintln!("{err}");
                AppExit::error()
            }
        };
    }

    let (config, catalog) = match cli::load_and_apply_config(&args) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{err}");
            return AppExit::error();
        }
    };

    if args.list_bodies {
        cli::handle_list_bodies(&catalog);
        return AppExit::Success;
    }

    let mut app = App::new();

    app.add_plugins((
        DefaultPlugins
            .set(LogPlugin {
                level: if args.verbose {
                    Level::DEBUG
                } else {
                    Level::INFO
                },
                filter: "wgpu=error,naga=warn".to_string(),
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Orrery".to_string(),
                    fit_canvas_to_parent: true,
                    ..default()
                }),
                ..default()
            }),
        MeshPickingPlugin,
        PanOrbitCameraPlugin,
    ));

    app.add_plugins((
        SimulationPlugin::new(config, catalog),
        TexturePlugin,
        CameraPlugin,
        ViewportPlugin,
        SelectionPlugin,
        InfoPanelPlugin,
        ControlsPlugin,
    ));

    app.run()
}
