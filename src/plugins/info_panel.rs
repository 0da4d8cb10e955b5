//! Info panel plugin - Self-contained plugin pattern
//!
//! Shows the selected body's name and description, and outlines the body in
//! the scene.

use crate::plugins::selection::Selection;
use crate::plugins::simulation::SimulationSet;
use crate::plugins::simulation::components::Body;
use crate::prelude::*;

const PANEL_MARGIN_PX: f32 = 8.0;
const PANEL_PADDING_PX: f32 = 8.0;
const PANEL_WIDTH_PX: f32 = 280.0;
const PANEL_TITLE_FONT_SIZE_PX: f32 = 18.0;
const PANEL_BODY_FONT_SIZE_PX: f32 = 13.0;
const PANEL_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.55);

const HIGHLIGHT_COLOR: Color = Color::srgb(0.95, 0.85, 0.4);
const HIGHLIGHT_SCALE: f32 = 1.4;

pub struct InfoPanelPlugin;

impl Plugin for InfoPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_info_panel);
        app.add_systems(
            Update,
            (update_info_panel, draw_selection_highlight).in_set(SimulationSet::UI),
        );
    }
}

#[derive(Component)]
pub struct InfoPanel;

#[derive(Component)]
pub struct InfoPanelTitle;

#[derive(Component)]
pub struct InfoPanelDescription;

/// Title and body text for the panel, `None` when nothing is selected.
pub fn panel_text(selection: &Selection, catalog: &BodyCatalog) -> Option<(String, String)> {
    selection
        .current(catalog)
        .map(|body| (body.name.clone(), body.description.clone()))
}

fn setup_info_panel(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Info Panel"),
            InfoPanel,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(PANEL_MARGIN_PX),
                right: Val::Px(PANEL_MARGIN_PX),
                width: Val::Px(PANEL_WIDTH_PX),
                padding: UiRect::all(Val::Px(PANEL_PADDING_PX)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                display: Display::None,
                ..default()
            },
            BorderRadius::all(Val::Px(4.0)),
            BackgroundColor(PANEL_BACKGROUND),
        ))
        .with_children(|parent| {
            parent.spawn((
                InfoPanelTitle,
                Text::new(""),
                TextColor(Color::WHITE),
                TextFont {
                    font_size: PANEL_TITLE_FONT_SIZE_PX,
                    ..default()
                },
            ));
            parent.spawn((
                InfoPanelDescription,
                Text::new(""),
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
                TextFont {
                    font_size: PANEL_BODY_FONT_SIZE_PX,
                    ..default()
                },
            ));
        });
}

fn update_info_panel(
    selection: Res<Selection>,
    catalog: Res<BodyCatalog>,
    mut initialized: Local<bool>,
    mut panels: Query<&mut Node, With<InfoPanel>>,
    mut titles: Query<&mut Text, (With<InfoPanelTitle>, Without<InfoPanelDescription>)>,
    mut descriptions: Query<&mut Text, (With<InfoPanelDescription>, Without<InfoPanelTitle>)>,
) {
    if *initialized && !selection.is_changed() {
        return;
    }
    if panels.is_empty() {
        return;
    }
    *initialized = true;

    let content = panel_text(&selection, &catalog);

    for mut node in &mut panels {
        node.display = if content.is_some() {
            Display::Flex
        } else {
            Display::None
        };
    }

    let (title, description) = content.unwrap_or_default();
    for mut text in &mut titles {
        *text = Text::new(title.clone());
    }
    for mut text in &mut descriptions {
        *text = Text::new(description.clone());
    }
}

fn draw_selection_highlight(
    mut gizmos: Gizmos,
    selection: Res<Selection>,
    catalog: Res<BodyCatalog>,
    bodies: Query<(&Body, &GlobalTransform)>,
) {
    let Some(selected) = selection.selected() else {
        return;
    };
    let Some(definition) = catalog.get(selected) else {
        return;
    };

    for (body, transform) in &bodies {
        if body.id == selected {
            gizmos.sphere(
                Isometry3d::from_translation(transform.translation()),
                definition.visual_size * HIGHLIGHT_SCALE,
                HIGHLIGHT_COLOR,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;

    #[test]
    fn test_panel_text_for_selection() {
        let catalog = BodyCatalog::default();
        let mut selection = Selection::default();
        assert_eq!(panel_text(&selection, &catalog), None);

        let saturn = catalog.find("Saturn").unwrap();
        selection.select(&catalog, Some(saturn));
        let (title, description) = panel_text(&selection, &catalog).unwrap();
        assert_eq!(title, "Saturn");
        assert_eq!(description, catalog.get(saturn).unwrap().description);
    }

    fn panel_app() -> App {
        let mut app = create_test_app();
        app.insert_resource(BodyCatalog::default());
        app.init_resource::<Selection>();
        app.add_systems(Startup, setup_info_panel);
        app.add_systems(Update, update_info_panel);
        app.update();
        app
    }

    fn title(app: &mut App) -> String {
        let mut query = app
            .world_mut()
            .query_filtered::<&Text, With<InfoPanelTitle>>();
        query.single(app.world()).unwrap().0.clone()
    }

    fn panel_display(app: &mut App) -> Display {
        let mut query = app.world_mut().query_filtered::<&Node, With<InfoPanel>>();
        query.single(app.world()).unwrap().display
    }

    #[test]
    fn test_panel_hidden_without_selection() {
        let mut app = panel_app();
        assert_eq!(panel_display(&mut app), Display::None);
        assert_eq!(title(&mut app), "");
    }

    #[test]
    fn test_panel_follows_selection() {
        let mut app = panel_app();

        let catalog = app.world().resource::<BodyCatalog>().clone();
        let mars = catalog.find("mars").unwrap();
        app.world_mut()
            .resource_mut::<Selection>()
            .select(&catalog, Some(mars));
        app.update();

        assert_eq!(panel_display(&mut app), Display::Flex);
        assert_eq!(title(&mut app), "Mars");

        app.world_mut().resource_mut::<Selection>().clear();
        app.update();

        assert_eq!(panel_display(&mut app), Display::None);
    }
}
