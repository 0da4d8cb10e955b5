//! Texture plugin - Self-contained plugin pattern
//!
//! Scene materials start out with a flat placeholder colour. Once an image
//! finishes loading it is attached to the material; an image that fails to load
//! leaves the placeholder in place and logs a warning.

use crate::plugins::simulation::SimulationSet;
use crate::plugins::simulation::components::PendingTexture;
use crate::prelude::*;
use bevy::asset::LoadState;

pub struct TexturePlugin;

impl Plugin for TexturePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, resolve_textures.in_set(SimulationSet::UI));
    }
}

/// What to do with a pending texture this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureResolution {
    Pending,
    Apply,
    Fallback,
}

impl TextureResolution {
    pub fn from_load_state(state: Option<LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => Self::Apply,
            Some(LoadState::Failed(_)) => Self::Fallback,
            // Unknown handles never resolve on their own
            None => Self::Fallback,
            Some(LoadState::NotLoaded) | Some(LoadState::Loading) => Self::Pending,
        }
    }
}

/// Attaches a loaded image to a material, keeping its colour otherwise untouched.
pub fn apply_texture(material: &mut StandardMaterial, image: Handle<Image>, emissive: bool) {
    if emissive {
        material.emissive_texture = Some(image.clone());
    }
    material.base_color = Color::WHITE;
    material.base_color_texture = Some(image);
}

fn resolve_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    pending: Query<(Entity, &PendingTexture, &MeshMaterial3d<StandardMaterial>)>,
) {
    for (entity, texture, material_handle) in &pending {
        match TextureResolution::from_load_state(asset_server.get_load_state(texture.image.id())) {
            TextureResolution::Pending => continue,
            TextureResolution::Apply => {
                if let Some(material) = materials.get_mut(&material_handle.0) {
                    apply_texture(material, texture.image.clone(), texture.emissive);
                }
            }
            TextureResolution::Fallback => {
                let path = texture
                    .image
                    .path()
                    .map(|path| path.to_string())
                    .unwrap_or_else(|| "<unnamed>".to_string());
                warn!("Texture {} failed to load, keeping placeholder colour", path);
            }
        }

        // The entity may have been despawned by a restart this frame
        commands.entity(entity).try_remove::<PendingTexture>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;

    #[test]
    fn test_load_state_resolution() {
        assert_eq!(
            TextureResolution::from_load_state(Some(LoadState::Loading)),
            TextureResolution::Pending
        );
        assert_eq!(
            TextureResolution::from_load_state(Some(LoadState::NotLoaded)),
            TextureResolution::Pending
        );
        assert_eq!(
            TextureResolution::from_load_state(Some(LoadState::Loaded)),
            TextureResolution::Apply
        );
        assert_eq!(
            TextureResolution::from_load_state(None),
            TextureResolution::Fallback
        );
    }

    #[test]
    fn test_failed_load_resolves_to_fallback() {
        use bevy::asset::{AssetLoadError, AssetPath};
        use std::sync::Arc;

        let error = AssetLoadError::AssetLoaderPanic {
            path: AssetPath::from("textures/earth.jpg"),
            loader_name: "image",
        };

        assert_eq!(
            TextureResolution::from_load_state(Some(LoadState::Failed(Arc::new(error)))),
            TextureResolution::Fallback
        );
    }

    #[test]
    fn test_apply_texture_sets_base_colour_only_when_not_emissive() {
        let mut material = StandardMaterial {
            base_color: Color::srgb(0.4, 0.4, 0.5),
            ..default()
        };

        apply_texture(&mut material, Handle::default(), false);

        assert!(material.base_color_texture.is_some());
        assert!(material.emissive_texture.is_none());
        assert_eq!(material.base_color, Color::WHITE);
    }

    #[test]
    fn test_apply_texture_drives_emissive_for_self_lit_surfaces() {
        let emissive = LinearRgba::new(6.0, 4.0, 1.5, 1.0);
        let mut material = StandardMaterial {
            emissive,
            ..default()
        };

        apply_texture(&mut material, Handle::default(), true);

        assert!(material.base_color_texture.is_some());
        assert!(material.emissive_texture.is_some());
        assert_eq!(material.emissive, emissive);
    }

    #[test]
    fn test_untracked_image_falls_back_to_placeholder() {
        let mut app = create_test_app();
        app.add_plugins(TexturePlugin);

        let placeholder = Color::srgb(0.4, 0.4, 0.5);
        let material = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial {
                base_color: placeholder,
                ..default()
            });
        // Added directly rather than loaded, so the server has no load state for it
        let image = app
            .world_mut()
            .resource_mut::<Assets<Image>>()
            .reserve_handle();
        let entity = app
            .world_mut()
            .spawn((
                MeshMaterial3d(material.clone()),
                PendingTexture {
                    image,
                    emissive: false,
                },
            ))
            .id();

        app.update();

        assert!(app.world().get::<PendingTexture>(entity).is_none());
        let materials = app.world().resource::<Assets<StandardMaterial>>();
        let material = materials.get(&material).unwrap();
        assert_eq!(material.base_color, placeholder);
        assert!(material.base_color_texture.is_none());
    }
}
