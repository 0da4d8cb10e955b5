//! Selection plugin - Self-contained plugin pattern
//!
//! Tracks which body (if any) the user has selected. Requests arrive as
//! `SelectBody` events from mesh clicks, the body list and number keys.

use crate::plugins::simulation::SimulationSet;
use crate::plugins::simulation::components::Body;
use crate::prelude::*;
use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>();
        app.add_event::<SelectBody>();
        app.add_observer(select_clicked_body);
        app.add_systems(
            Update,
            (clear_selection_on_restart, handle_select_body)
                .chain()
                .in_set(SimulationSet::Input),
        );
        app.add_systems(OnEnter(AppState::Stopped), clear_selection);
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    selected: Option<BodyId>,
}

impl Selection {
    /// Selects `id`, or clears the selection for `None`.
    ///
    /// Ids outside the catalog are a caller bug; the selection is left as it was.
    pub fn select(&mut self, catalog: &BodyCatalog, id: Option<BodyId>) {
        match id {
            None => self.selected = None,
            Some(id) if catalog.contains(id) => self.selected = Some(id),
            Some(id) => {
                debug_assert!(false, "selected body {id} is not in the catalog");
                warn!("Ignoring selection of unknown body {}", id);
            }
        }
    }

    pub fn selected(&self) -> Option<BodyId> {
        self.selected
    }

    pub fn current<'a>(&self, catalog: &'a BodyCatalog) -> Option<&'a BodyDefinition> {
        self.selected.and_then(|id| catalog.get(id))
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

fn handle_select_body(
    mut requests: EventReader<SelectBody>,
    catalog: Res<BodyCatalog>,
    state: Res<State<AppState>>,
    mut selection: ResMut<Selection>,
) {
    for SelectBody(id) in requests.read() {
        // Only bodies present in the scene can be selected
        if id.is_some() && !state.has_scene() {
            debug!("Ignoring selection of body while {:?}", state.get());
            continue;
        }
        selection.select(&catalog, *id);
        match selection.current(&catalog) {
            Some(body) => debug!("Selected {}", body.name),
            None => debug!("Selection cleared"),
        }
    }
}

fn select_clicked_body(
    trigger: Trigger<Pointer<Click>>,
    bodies: Query<&Body>,
    mut requests: EventWriter<SelectBody>,
) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }

    if let Ok(body) = bodies.get(trigger.target()) {
        requests.write(SelectBody(Some(body.id)));
    }
}

fn clear_selection_on_restart(
    mut commands_reader: EventReader<SimulationCommand>,
    mut selection: ResMut<Selection>,
) {
    for command in commands_reader.read() {
        if matches!(command, SimulationCommand::Restart) {
            selection.clear();
        }
    }
}

fn clear_selection(mut selection: ResMut<Selection>) {
    selection.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;

    #[test]
    fn test_round_trip_for_every_body() {
        let catalog = BodyCatalog::default();
        let mut selection = Selection::default();

        for (id, definition) in catalog.iter() {
            selection.select(&catalog, Some(id));
            assert_eq!(selection.selected(), Some(id));
            assert_eq!(selection.current(&catalog), Some(definition));
        }
    }

    #[test]
    fn test_select_none_clears() {
        let catalog = BodyCatalog::default();
        let mut selection = Selection::default();

        selection.select(&catalog, Some(BodyId(2)));
        selection.select(&catalog, None);

        assert_eq!(selection.selected(), None);
        assert_eq!(selection.current(&catalog), None);
    }

    #[test]
    fn test_earth_description_is_surfaced() {
        let catalog = BodyCatalog::default();
        let mut selection = Selection::default();
        let earth = catalog.find("earth").unwrap();

        selection.select(&catalog, Some(earth));

        let current = selection.current(&catalog).unwrap();
        assert_eq!(current.name, "Earth");
        assert!(!current.description.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not in the catalog")]
    fn test_unknown_id_is_a_bug() {
        let catalog = BodyCatalog::default();
        Selection::default().select(&catalog, Some(BodyId(catalog.len())));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_unknown_id_keeps_selection() {
        let catalog = BodyCatalog::default();
        let mut selection = Selection::default();
        selection.select(&catalog, Some(BodyId(1)));
        selection.select(&catalog, Some(BodyId(catalog.len())));
        assert_eq!(selection.selected(), Some(BodyId(1)));
    }

    fn selection_app() -> App {
        let mut app = create_test_app();
        app.insert_resource(BodyCatalog::default());
        app.add_plugins(SelectionPlugin);
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Running);
        app.update();
        app
    }

    #[test]
    fn test_select_body_events_are_applied() {
        let mut app = selection_app();

        app.world_mut().send_event(SelectBody(Some(BodyId(4))));
        app.update();
        assert_eq!(
            app.world().resource::<Selection>().selected(),
            Some(BodyId(4))
        );

        app.world_mut().send_event(SelectBody(None));
        app.update();
        assert_eq!(app.world().resource::<Selection>().selected(), None);
    }

    #[test]
    fn test_latest_request_wins_within_a_frame() {
        let mut app = selection_app();

        app.world_mut().send_event(SelectBody(Some(BodyId(0))));
        app.world_mut().send_event(SelectBody(Some(BodyId(7))));
        app.update();

        assert_eq!(
            app.world().resource::<Selection>().selected(),
            Some(BodyId(7))
        );
    }

    #[test]
    fn test_restart_clears_selection() {
        let mut app = selection_app();

        app.world_mut().send_event(SelectBody(Some(BodyId(3))));
        app.update();
        app.world_mut().send_event(SimulationCommand::Restart);
        app.update();

        assert_eq!(app.world().resource::<Selection>().selected(), None);
    }

    #[test]
    fn test_requests_without_a_scene_are_ignored() {
        let mut app = create_test_app();
        app.insert_resource(BodyCatalog::default());
        app.add_plugins(SelectionPlugin);

        app.world_mut().send_event(SelectBody(Some(BodyId(2))));
        app.update();
        assert_eq!(app.world().resource::<Selection>().selected(), None);

        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Stopped);
        app.update();
        app.world_mut().send_event(SelectBody(Some(BodyId(5))));
        app.update();
        assert_eq!(app.world().resource::<Selection>().selected(), None);
    }
}
