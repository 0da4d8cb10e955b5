//! Components carried by scene entities

use crate::prelude::*;
use std::f32::consts::TAU;

/// Marks every entity spawned for the solar system so a teardown can remove them all.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneEntity;

/// The light-emitting body at the origin.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct CentralBody;

/// An orbiting body and the catalog entry it was built from.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body {
    pub id: BodyId,
}

/// Flat annulus attached to a ringed body. Follows its parent, never animated on its own.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Ring;

/// Static circle tracing one body's orbit.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitGuide {
    pub body: BodyId,
}

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Backdrop;

/// Circular orbit state of a body, in the XZ plane around the origin.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Current angle in radians, kept in `[0, 2π)`
    pub angle: f32,
    pub radius: f32,
    /// Radians per frame
    pub angular_speed: f32,
}

impl Orbit {
    pub fn new(radius: f32, angular_speed: f32, angle: f32) -> Self {
        Self {
            angle: wrap_angle(angle),
            radius,
            angular_speed,
        }
    }

    /// Advances the angle by one frame's worth of motion.
    ///
    /// The angle is wrapped to `[0, 2π)`, which keeps f32 precision constant over long
    /// sessions; positions are unaffected because only `sin`/`cos` consume it.
    pub fn advance(&mut self, global_rate: f32) {
        self.angle = wrap_angle(self.angle + self.angular_speed + global_rate);
    }

    pub fn position(&self) -> Vec3 {
        let (sin, cos) = self.angle.sin_cos();
        Vec3::new(cos * self.radius, 0.0, sin * self.radius)
    }
}

/// Texture that is still loading for this entity's material.
///
/// The entity renders with its placeholder material until the image resolves.
#[derive(Component, Debug, Clone)]
pub struct PendingTexture {
    pub image: Handle<Image>,
    /// Also drive the emissive channel, for self-lit surfaces
    pub emissive: bool,
}

/// Wraps an angle into `[0, 2π)`.
///
/// `rem_euclid` alone can round a tiny negative angle up to exactly `TAU`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Shortest signed distance between two angles, in `(-π, π]`.
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let difference = (a - b).rem_euclid(TAU);
    if difference > TAU / 2.0 {
        difference - TAU
    } else {
        difference
    }
}
