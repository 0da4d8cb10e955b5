//! Per-frame orbital motion

use super::components::Orbit;
use crate::prelude::*;

/// Advances every orbit by one frame and moves its entity onto the new position.
///
/// Motion is per rendered frame, not per second, so the apparent speed follows the
/// frame rate.
pub fn advance_orbits(
    rate: Res<GlobalSimulationRate>,
    mut bodies: Query<(&mut Orbit, &mut Transform)>,
) {
    for (mut orbit, mut transform) in &mut bodies {
        orbit.advance(**rate);
        transform.translation = orbit.position();
    }
}
