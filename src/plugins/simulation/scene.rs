//! Scene construction
//!
//! Building happens in two steps. [`SceneBuilder::build`] turns the catalog into
//! a [`ScenePlan`], plain owned data with every random choice already made, and
//! [`spawn_scene`] turns a plan into entities, meshes and materials. Keeping
//! the plan free of ECS types lets it be inspected and tested on its own.

use super::components::{
    Backdrop, Body, CentralBody, Orbit, OrbitGuide, PendingTexture, Ring, SceneEntity,
};
use crate::config::SceneConfig;
use crate::prelude::*;
use bevy::picking::Pickable;
use bevy::render::render_resource::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use std::f32::consts::{PI, TAU};

/// Tilt of ring planes around the X axis.
pub const RING_TILT: f32 = -PI / 2.5;
pub const RING_INNER_SCALE: f32 = 1.2;
pub const RING_OUTER_SCALE: f32 = 2.0;
const RING_RESOLUTION: u32 = 60;

const SPHERE_SECTORS: u32 = 32;
const SPHERE_STACKS: u32 = 32;

const BODY_PLACEHOLDER_COLOR: Color = Color::srgb(0.55, 0.55, 0.6);
const SUN_COLOR: Color = Color::srgb(1.0, 0.8, 0.35);
const SUN_EMISSIVE: LinearRgba = LinearRgba::rgb(6.0, 4.0, 1.5);
const RING_COLOR: Color = Color::srgba(0.733, 0.667, 0.8, 0.6);
const GUIDE_COLOR: Color = Color::srgb(0.533, 0.533, 0.533);

#[derive(Debug, Clone, PartialEq)]
pub struct ScenePlan {
    pub central: CentralBodyPlan,
    pub bodies: Vec<OrbitalBodyPlan>,
    pub guides: Vec<OrbitGuidePlan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CentralBodyPlan {
    pub radius: f32,
    pub texture: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalBodyPlan {
    pub id: BodyId,
    pub name: String,
    pub orbit: Orbit,
    pub size: f32,
    pub texture: String,
    pub ring: Option<RingPlan>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPlan {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub tilt: f32,
}

impl RingPlan {
    pub fn for_body_size(size: f32) -> Self {
        Self {
            inner_radius: size * RING_INNER_SCALE,
            outer_radius: size * RING_OUTER_SCALE,
            tilt: RING_TILT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitGuidePlan {
    pub body: BodyId,
    /// Closed polyline; the last point repeats the first
    pub points: Vec<Vec3>,
}

/// Closed polyline approximating a circle of `radius` in the XZ plane.
pub fn orbit_guide_points(radius: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * TAU;
            Vec3::new(theta.cos() * radius, 0.0, theta.sin() * radius)
        })
        .collect()
}

pub struct SceneBuilder<'a> {
    config: &'a SceneConfig,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(config: &'a SceneConfig) -> Self {
        Self { config }
    }

    /// Plans one orbiting body and one guide per catalog entry, each body starting
    /// at an independent random angle in `[0, 2π)`.
    pub fn build(&self, catalog: &BodyCatalog, rng: &mut SharedRng) -> ScenePlan {
        let mut bodies = Vec::with_capacity(catalog.len());
        let mut guides = Vec::with_capacity(catalog.len());

        for (id, definition) in catalog.iter() {
            let angle = rng.random_range(0.0..TAU);

            bodies.push(OrbitalBodyPlan {
                id,
                name: definition.name.clone(),
                orbit: Orbit::new(definition.orbit_radius, definition.angular_speed, angle),
                size: definition.visual_size,
                texture: definition.texture.clone(),
                ring: definition
                    .has_rings
                    .then(|| RingPlan::for_body_size(definition.visual_size)),
            });

            guides.push(OrbitGuidePlan {
                body: id,
                points: orbit_guide_points(definition.orbit_radius, self.config.guide_segments),
            });
        }

        ScenePlan {
            central: CentralBodyPlan {
                radius: self.config.sun_radius,
                texture: self.config.sun_texture.clone(),
            },
            bodies,
            guides,
        }
    }
}

fn line_strip_mesh(points: &[Vec3]) -> Mesh {
    Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, points.to_vec())
}

fn sphere_mesh(meshes: &mut Assets<Mesh>, radius: f32) -> Handle<Mesh> {
    meshes.add(Sphere::new(radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS))
}

/// Spawns every entity described by `plan`. Textured surfaces start with a
/// placeholder material and a [`PendingTexture`] for the texture plugin to resolve.
pub fn spawn_scene(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    plan: &ScenePlan,
    config: &SceneConfig,
    guides_visible: bool,
) {
    commands.spawn((
        Name::new("Backdrop"),
        Backdrop,
        SceneEntity,
        Mesh3d(sphere_mesh(meshes, config.backdrop_radius)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::BLACK,
            unlit: true,
            cull_mode: None,
            double_sided: true,
            ..default()
        })),
        PendingTexture {
            image: asset_server.load(config.backdrop_texture.clone()),
            emissive: false,
        },
        Pickable::IGNORE,
    ));

    commands.spawn((
        Name::new("Sun Light"),
        SceneEntity,
        PointLight {
            intensity: config.point_light_intensity,
            range: config.point_light_range,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));

    commands.spawn((
        Name::new("Sun"),
        CentralBody,
        SceneEntity,
        Mesh3d(sphere_mesh(meshes, plan.central.radius)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: SUN_COLOR,
            emissive: SUN_EMISSIVE,
            ..default()
        })),
        PendingTexture {
            image: asset_server.load(plan.central.texture.clone()),
            emissive: true,
        },
        Transform::default(),
        Pickable::IGNORE,
    ));

    for body in &plan.bodies {
        let mut entity = commands.spawn((
            Name::new(body.name.clone()),
            Body { id: body.id },
            body.orbit,
            SceneEntity,
            Mesh3d(sphere_mesh(meshes, body.size)),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: BODY_PLACEHOLDER_COLOR,
                perceptual_roughness: 0.9,
                ..default()
            })),
            PendingTexture {
                image: asset_server.load(body.texture.clone()),
                emissive: false,
            },
            Transform::from_translation(body.orbit.position()),
        ));

        if let Some(ring) = body.ring {
            let ring_mesh = meshes.add(
                Annulus::new(ring.inner_radius, ring.outer_radius)
                    .mesh()
                    .resolution(RING_RESOLUTION),
            );
            let ring_material = materials.add(StandardMaterial {
                base_color: RING_COLOR,
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                double_sided: true,
                cull_mode: None,
                ..default()
            });

            entity.with_children(|parent| {
                parent.spawn((
                    Name::new(format!("{} Ring", body.name)),
                    Ring,
                    SceneEntity,
                    Mesh3d(ring_mesh),
                    MeshMaterial3d(ring_material),
                    Transform::from_rotation(Quat::from_rotation_x(ring.tilt)),
                    Pickable::IGNORE,
                ));
            });
        }
    }

    let guide_material = materials.add(StandardMaterial {
        base_color: GUIDE_COLOR,
        unlit: true,
        cull_mode: None,
        ..default()
    });
    let guide_visibility = if guides_visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };

    for guide in &plan.guides {
        commands.spawn((
            Name::new("Orbit Guide"),
            OrbitGuide { body: guide.body },
            SceneEntity,
            Mesh3d(meshes.add(line_strip_mesh(&guide.points))),
            MeshMaterial3d(guide_material.clone()),
            Transform::default(),
            guide_visibility,
            Pickable::IGNORE,
        ));
    }
}
