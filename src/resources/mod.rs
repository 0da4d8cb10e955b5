use crate::prelude::*;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct SharedRng(pub ChaCha8Rng);

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::default(),
        }
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

/// Radians per frame added to every body's own angular speed.
#[derive(Resource, Deref, DerefMut, Copy, Clone, PartialEq, Debug)]
pub struct GlobalSimulationRate(pub f32);

impl GlobalSimulationRate {
    /// Moves the rate by `delta`, keeping it within `[-limit, limit]`.
    pub fn adjust(&mut self, delta: f32, limit: f32) {
        let limit = limit.abs();
        self.0 = (self.0 + delta).clamp(-limit, limit);
    }
}

impl Default for GlobalSimulationRate {
    fn default() -> Self {
        Self(0.001)
    }
}

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitGuideVisibility {
    pub enabled: bool,
}
