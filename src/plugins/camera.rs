//! Camera plugin - Self-contained plugin pattern
//!
//! Spawns the orbiting camera. Dragging, scrolling and the exponential damping
//! toward the target pose are handled by `PanOrbitCamera` every frame; this
//! plugin only decides the initial pose, the limits and the reset behaviour.

use crate::config::CameraConfig;
use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;
use bevy::core_pipeline::bloom::Bloom;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy_panorbit_camera::PanOrbitCamera;
use bevy_panorbit_camera::TouchControls;
use bevy_panorbit_camera::TrackpadBehavior;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
        app.add_systems(
            Update,
            handle_reset_camera_event.in_set(SimulationSet::Camera),
        );
    }
}

/// Marks the camera the scene is viewed through.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MainCamera;

/// Spherical pose of the camera around its focus, in the convention
/// `PanOrbitCamera` uses (yaw about Y measured from +Z, pitch above the XZ plane).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPose {
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

impl OrbitPose {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return Self {
                yaw: 0.0,
                pitch: 0.0,
                radius: 0.0,
            };
        }

        Self {
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
            radius,
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(
            self.radius * cos_pitch * sin_yaw,
            self.radius * sin_pitch,
            self.radius * cos_pitch * cos_yaw,
        )
    }
}

/// Builds the orbit controller for the configured starting position, focused on the origin.
pub fn camera_rig(config: &CameraConfig) -> PanOrbitCamera {
    let pose = OrbitPose::from_offset(Vec3::from_array(config.position));

    PanOrbitCamera {
        focus: Vec3::ZERO,
        target_focus: Vec3::ZERO,
        yaw: Some(pose.yaw),
        pitch: Some(pose.pitch),
        radius: Some(pose.radius),
        target_yaw: pose.yaw,
        target_pitch: pose.pitch,
        target_radius: pose.radius,
        orbit_smoothness: config.orbit_smoothness,
        zoom_smoothness: config.zoom_smoothness,
        pan_smoothness: config.pan_smoothness,
        zoom_lower_limit: config.zoom_lower_limit,
        zoom_upper_limit: config.zoom_upper_limit,
        touch_enabled: true,
        touch_controls: TouchControls::OneFingerOrbit,
        trackpad_behavior: TrackpadBehavior::blender_default(),
        trackpad_pinch_to_zoom_enabled: true,
        ..default()
    }
}

pub fn perspective(config: &CameraConfig) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: config.fov_degrees.to_radians(),
        near: config.near,
        far: config.far,
        ..default()
    }
}

fn spawn_camera(mut commands: Commands, config: Res<OrreryConfig>) {
    let camera = &config.camera;

    commands.spawn((
        Name::new("Main Camera"),
        MainCamera,
        Camera {
            hdr: true,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        Camera3d::default(),
        Tonemapping::AcesFitted,
        Bloom::NATURAL,
        Msaa::Sample4,
        Projection::Perspective(perspective(camera)),
        Transform::from_translation(Vec3::from_array(camera.position))
            .looking_at(Vec3::ZERO, Vec3::Y),
        camera_rig(camera),
    ));
}

fn handle_reset_camera_event(
    mut commands_reader: EventReader<SimulationCommand>,
    config: Res<OrreryConfig>,
    mut cameras: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::ResetCamera) {
            continue;
        }

        let initial = camera_rig(&config.camera);
        for mut camera in &mut cameras {
            // Only the targets move; the controller damps toward them
            camera.target_focus = initial.target_focus;
            camera.target_yaw = initial.target_yaw;
            camera.target_pitch = initial.target_pitch;
            camera.target_radius = initial.target_radius;
        }
        debug!("Camera reset to initial pose");
    }
}
