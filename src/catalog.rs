//! Body catalog
//!
//! The catalog is the static list of bodies that orbit the central star. It is
//! validated once at startup and never changes afterwards; everything that
//! spawns or describes a body refers back to it through a [`BodyId`].

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Index of a body inside its [`BodyCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Declarative description of one orbiting body.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BodyDefinition {
    pub name: String,
    /// Distance from the central body, in scene units.
    pub orbit_radius: f32,
    /// Radians added to the orbital angle every frame. Negative values orbit clockwise.
    pub angular_speed: f32,
    pub visual_size: f32,
    /// Asset path of the surface texture.
    pub texture: String,
    pub description: String,
    #[serde(default)]
    pub has_rings: bool,
}

impl BodyDefinition {
    pub fn new(
        name: impl Into<String>,
        orbit_radius: f32,
        angular_speed: f32,
        visual_size: f32,
        texture: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            orbit_radius,
            angular_speed,
            visual_size,
            texture: texture.into(),
            description: description.into(),
            has_rings: false,
        }
    }

    pub fn with_rings(mut self) -> Self {
        self.has_rings = true;
        self
    }

    fn validate(&self, index: usize) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::MissingName { index });
        }
        if !self.orbit_radius.is_finite() || self.orbit_radius <= 0.0 {
            return Err(CatalogError::NonPositiveRadius {
                name: self.name.clone(),
                value: self.orbit_radius,
            });
        }
        if !self.visual_size.is_finite() || self.visual_size <= 0.0 {
            return Err(CatalogError::NonPositiveSize {
                name: self.name.clone(),
                value: self.visual_size,
            });
        }
        if !self.angular_speed.is_finite() {
            return Err(CatalogError::NonFiniteSpeed {
                name: self.name.clone(),
                value: self.angular_speed,
            });
        }
        Ok(())
    }
}

/// Reasons a catalog is rejected at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog has no bodies at all
    Empty,
    /// A body has an empty name
    MissingName { index: usize },
    /// Two bodies share a name
    DuplicateName { name: String },
    /// Orbit radius is zero, negative or not finite
    NonPositiveRadius { name: String, value: f32 },
    /// Visual size is zero, negative or not finite
    NonPositiveSize { name: String, value: f32 },
    /// Angular speed is NaN or infinite
    NonFiniteSpeed { name: String, value: f32 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "body catalog is empty"),
            CatalogError::MissingName { index } => {
                write!(f, "body at position {index} has no name")
            }
            CatalogError::DuplicateName { name } => {
                write!(f, "body name '{name}' is used more than once")
            }
            CatalogError::NonPositiveRadius { name, value } => {
                write!(f, "body '{name}' has invalid orbit radius {value} (must be > 0)")
            }
            CatalogError::NonPositiveSize { name, value } => {
                write!(f, "body '{name}' has invalid size {value} (must be > 0)")
            }
            CatalogError::NonFiniteSpeed { name, value } => {
                write!(f, "body '{name}' has non-finite angular speed {value}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Validated, immutable list of orbiting bodies.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct BodyCatalog {
    bodies: Vec<BodyDefinition>,
}

impl BodyCatalog {
    /// Validates every definition and rejects the whole catalog on the first bad one.
    pub fn new(bodies: Vec<BodyDefinition>) -> Result<Self, CatalogError> {
        if bodies.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(bodies.len());
        for (index, body) in bodies.iter().enumerate() {
            body.validate(index)?;
            if !seen.insert(body.name.trim().to_lowercase()) {
                return Err(CatalogError::DuplicateName {
                    name: body.name.clone(),
                });
            }
        }

        Ok(Self { bodies })
    }

    pub fn get(&self, id: BodyId) -> Option<&BodyDefinition> {
        self.bodies.get(id.0)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        id.0 < self.bodies.len()
    }

    /// Looks a body up by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|body| body.name.eq_ignore_ascii_case(name.trim()))
            .map(BodyId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &BodyDefinition)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, body)| (BodyId(index), body))
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        (0..self.bodies.len()).map(BodyId)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn definitions(&self) -> &[BodyDefinition] {
        &self.bodies
    }
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self {
            bodies: default_bodies(),
        }
    }
}

/// The eight planets, with speeds tuned for a pleasant pace rather than realism.
pub fn default_bodies() -> Vec<BodyDefinition> {
    vec![
        BodyDefinition::new(
            "Mercury",
            14.0,
            0.03,
            0.8,
            "textures/mercury.jpg",
            "Mercury is the planet closest to the Sun.",
        ),
        BodyDefinition::new(
            "Venus",
            18.0,
            0.015,
            1.2,
            "textures/venus.jpg",
            "Venus has a very dense atmosphere.",
        ),
        BodyDefinition::new(
            "Earth",
            22.0,
            0.01,
            1.3,
            "textures/earth.jpg",
            "Our blue home.",
        ),
        BodyDefinition::new(
            "Mars",
            26.0,
            0.008,
            1.1,
            "textures/mars.jpg",
            "The red planet.",
        ),
        BodyDefinition::new(
            "Jupiter",
            34.0,
            0.005,
            3.2,
            "textures/jupiter.jpg",
            "The largest planet in the solar system.",
        ),
        BodyDefinition::new(
            "Saturn",
            47.0,
            0.004,
            2.5,
            "textures/saturn.jpg",
            "Famous for its rings.",
        )
        .with_rings(),
        BodyDefinition::new(
            "Uranus",
            60.0,
            0.003,
            2.3,
            "textures/uranus.jpg",
            "A tilted ice giant.",
        ),
        BodyDefinition::new(
            "Neptune",
            68.0,
            0.0025,
            2.4,
            "textures/neptune.jpg",
            "The planet farthest from the Sun.",
        ),
    ]
}
