//! Controls plugin - Self-contained plugin pattern
//!
//! This plugin handles all user input (keyboard and UI buttons) and translates
//! them into SimulationCommand and SelectBody events. It provides a unified
//! interface for controlling the simulation, regardless of input method.

use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::window::SystemCursorIcon;
use bevy::winit::cursor::CursorIcon;

mod builder;
mod buttons;
mod constants;

pub use builder::ButtonWithLabel;
use builder::ControlsCommandsExt;
pub use buttons::*;
use constants::*;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_controls_ui);

        app.add_systems(
            Update,
            (
                keyboard_input_handler,
                button_interaction_handler::<RestartSimulationButton>,
                button_interaction_handler::<PauseButton>,
                button_interaction_handler::<StopSimulationButton>,
                button_interaction_handler::<SpeedUpButton>,
                button_interaction_handler::<SlowDownButton>,
                button_interaction_handler::<OrbitGuideToggleButton>,
                button_interaction_handler::<ResetCameraButton>,
                #[cfg(not(target_arch = "wasm32"))]
                button_interaction_handler::<QuitButton>,
                body_button_interaction_handler,
            )
                .before(SimulationSet::Input),
        );

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(Update, handle_quit_event.in_set(SimulationSet::Input));

        app.add_systems(
            Startup,
            (
                guides::sync_orbit_guide_button_text,
                pause::sync_pause_button_text,
            )
                .after(setup_controls_ui),
        );

        app.add_systems(
            Update,
            (
                guides::sync_orbit_guide_button_text,
                pause::sync_pause_button_text,
                sync_body_button_colors,
                update_status_text,
            )
                .in_set(SimulationSet::UI),
        );
    }
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Command(SimulationCommand),
    Select(Option<BodyId>),
}

/// Maps a logical key to its action. Digits `1..=9` select the matching body
/// when it exists in a catalog of `body_count` bodies; `0` clears the selection.
pub fn key_action(key: &Key, body_count: usize) -> Option<KeyAction> {
    match key {
        Key::Space => Some(KeyAction::Command(SimulationCommand::TogglePause)),
        #[cfg(not(target_arch = "wasm32"))]
        Key::Escape => Some(KeyAction::Command(SimulationCommand::Quit)),
        Key::Character(c) => {
            let ch = c.to_lowercase();
            match ch.as_str() {
                "n" => Some(KeyAction::Command(SimulationCommand::Restart)),
                "x" => Some(KeyAction::Command(SimulationCommand::Stop)),
                "+" | "=" => Some(KeyAction::Command(SimulationCommand::SpeedUp)),
                "-" => Some(KeyAction::Command(SimulationCommand::SlowDown)),
                "g" => Some(KeyAction::Command(SimulationCommand::ToggleOrbitGuides)),
                "r" => Some(KeyAction::Command(SimulationCommand::ResetCamera)),
                #[cfg(not(target_arch = "wasm32"))]
                "q" => Some(KeyAction::Command(SimulationCommand::Quit)),
                "0" => Some(KeyAction::Select(None)),
                digit => {
                    let index = digit.parse::<usize>().ok()?.checked_sub(1)?;
                    (index < body_count.min(9)).then_some(KeyAction::Select(Some(BodyId(index))))
                }
            }
        }
        _ => None,
    }
}

fn keyboard_input_handler(
    mut keyboard_events: EventReader<KeyboardInput>,
    catalog: Res<BodyCatalog>,
    mut commands: EventWriter<SimulationCommand>,
    mut selections: EventWriter<SelectBody>,
) {
    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }

        match key_action(&event.logical_key, catalog.len()) {
            Some(KeyAction::Command(command)) => {
                commands.write(command);
            }
            Some(KeyAction::Select(id)) => {
                selections.write(SelectBody(id));
            }
            None => {}
        }
    }
}

fn button_interaction_handler<T: ButtonWithLabel>(
    mut commands: Commands,
    window: Single<Entity, With<Window>>,
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<T>),
    >,
    mut command_writer: EventWriter<SimulationCommand>,
) {
    for (interaction, mut color) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                commands
                    .entity(*window)
                    .insert(CursorIcon::System(SystemCursorIcon::Pointer));

                *color = BackgroundColor(BUTTON_COLOR_PRESSED);
                command_writer.write(T::command());
            }
            Interaction::Hovered => {
                commands
                    .entity(*window)
                    .insert(CursorIcon::System(SystemCursorIcon::Pointer));

                *color = BackgroundColor(BUTTON_COLOR_HOVERED);
            }
            Interaction::None => {
                commands
                    .entity(*window)
                    .insert(CursorIcon::System(SystemCursorIcon::Default));

                *color = BackgroundColor(BUTTON_COLOR_NORMAL);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn handle_quit_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut exit: EventWriter<AppExit>,
) {
    for command in commands_reader.read() {
        if matches!(command, SimulationCommand::Quit) {
            info!("Quitting");
            exit.write_default();
        }
    }
}

#[derive(Component)]
pub struct UIRoot;

#[derive(Component)]
pub struct BodyList;

#[derive(Component)]
pub struct StatusText;

pub fn status_line(rate: f32, state: &AppState) -> String {
    let state = match state {
        AppState::Uninitialized => "Starting",
        AppState::Running => "Running",
        AppState::Paused => "Paused",
        AppState::Stopped => "Stopped",
    };
    format!("{state} | rate {rate:+.4} rad/frame")
}

fn setup_controls_ui(mut commands: Commands, catalog: Res<BodyCatalog>) {
    commands
        .spawn((
            Name::new("Body List"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(BUTTON_MARGIN_PX),
                left: Val::Px(BUTTON_MARGIN_PX),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexStart,
                row_gap: Val::Px(BUTTON_GAP_PX),
                ..default()
            },
            BodyList,
        ))
        .with_children(|parent| {
            for (id, body) in catalog.iter() {
                parent.spawn_labelled_button(BodyButton { id }, body_button_label(id, &body.name));
            }
        });

    commands
        .spawn((
            Name::new("Controls"),
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(BUTTON_MARGIN_PX),
                left: Val::Px(BUTTON_MARGIN_PX),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexStart,
                row_gap: Val::Px(BUTTON_GAP_PX),
                ..default()
            },
            UIRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                StatusText,
                Text::new(""),
                TextColor(STATUS_COLOR),
                TextFont {
                    font_size: STATUS_FONT_SIZE_PX,
                    ..default()
                },
            ));
            parent.spawn_control_button::<RestartSimulationButton>();
            parent.spawn_control_button::<PauseButton>();
            parent.spawn_control_button::<StopSimulationButton>();
            parent.spawn_control_button::<SpeedUpButton>();
            parent.spawn_control_button::<SlowDownButton>();
            parent.spawn_control_button::<OrbitGuideToggleButton>();
            parent.spawn_control_button::<ResetCameraButton>();
            #[cfg(not(target_arch = "wasm32"))]
            parent.spawn_control_button::<QuitButton>();
        });
}

fn update_status_text(
    rate: Res<GlobalSimulationRate>,
    state: Res<State<AppState>>,
    mut initialized: Local<bool>,
    mut status: Query<&mut Text, With<StatusText>>,
) {
    if *initialized && !rate.is_changed() && !state.is_changed() {
        return;
    }
    *initialized = true;

    let line = status_line(**rate, state.get());
    for mut text in &mut status {
        *text = Text::new(line.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_app, create_test_app_with_catalog, press_logical_key};

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn test_command_shortcuts() {
        let cases = [
            (character("n"), SimulationCommand::Restart),
            (character("N"), SimulationCommand::Restart),
            (Key::Space, SimulationCommand::TogglePause),
            (character("x"), SimulationCommand::Stop),
            (character("+"), SimulationCommand::SpeedUp),
            (character("="), SimulationCommand::SpeedUp),
            (character("-"), SimulationCommand::SlowDown),
            (character("g"), SimulationCommand::ToggleOrbitGuides),
            (character("r"), SimulationCommand::ResetCamera),
        ];

        for (key, command) in cases {
            assert_eq!(
                key_action(&key, 8),
                Some(KeyAction::Command(command)),
                "{key:?}"
            );
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_quit_shortcuts() {
        let quit = Some(KeyAction::Command(SimulationCommand::Quit));
        assert_eq!(key_action(&Key::Escape, 8), quit);
        assert_eq!(key_action(&character("q"), 8), quit);
    }

    #[test]
    fn test_digits_select_bodies() {
        assert_eq!(
            key_action(&character("1"), 8),
            Some(KeyAction::Select(Some(BodyId(0))))
        );
        assert_eq!(
            key_action(&character("8"), 8),
            Some(KeyAction::Select(Some(BodyId(7))))
        );
        assert_eq!(key_action(&character("0"), 8), Some(KeyAction::Select(None)));
    }

    #[test]
    fn test_digits_beyond_catalog_are_ignored() {
        assert_eq!(key_action(&character("9"), 8), None);
        assert_eq!(key_action(&character("3"), 2), None);
        assert_eq!(key_action(&character("z"), 8), None);
        assert_eq!(key_action(&Key::Enter, 8), None);
    }

    #[test]
    fn test_body_button_labels() {
        assert_eq!(body_button_label(BodyId(0), "Mercury"), "Mercury (1)");
        assert_eq!(body_button_label(BodyId(8), "Pluto"), "Pluto (9)");
        assert_eq!(body_button_label(BodyId(9), "Eris"), "Eris");
    }

    #[test]
    fn test_status_line() {
        assert_eq!(
            status_line(0.001, &AppState::Running),
            "Running | rate +0.0010 rad/frame"
        );
        assert_eq!(
            status_line(-0.002, &AppState::Paused),
            "Paused | rate -0.0020 rad/frame"
        );
    }

    #[test]
    fn test_pause_label_follows_state() {
        assert_eq!(pause::pause_label(&AppState::Running), "Pause (Space)");
        assert_eq!(pause::pause_label(&AppState::Paused), "Resume (Space)");
    }

    fn button_label<T: Component>(app: &mut App) -> String {
        let children: Vec<Entity> = {
            let mut query = app.world_mut().query_filtered::<&Children, With<T>>();
            query.single(app.world()).unwrap().iter().collect()
        };
        children
            .into_iter()
            .find_map(|child| app.world().get::<Text>(child).map(|text| text.0.clone()))
            .unwrap()
    }

    fn controls_ui_app() -> App {
        let mut app = create_test_app();
        app.insert_resource(BodyCatalog::default());
        app.insert_resource(GlobalSimulationRate::default());
        app.insert_resource(OrbitGuideVisibility { enabled: true });
        app.add_systems(Startup, setup_controls_ui);
        app.add_systems(
            Update,
            (
                guides::sync_orbit_guide_button_text,
                pause::sync_pause_button_text,
                update_status_text,
            ),
        );
        app.update();
        app
    }

    #[test]
    fn test_ui_lists_every_body() {
        let mut app = controls_ui_app();
        let mut query = app.world_mut().query::<&BodyButton>();
        let mut ids: Vec<BodyId> = query.iter(app.world()).map(|button| button.id).collect();
        ids.sort();
        assert_eq!(ids, BodyCatalog::default().ids().collect::<Vec<_>>());
    }

    #[test]
    fn test_guide_button_text_follows_visibility() {
        let mut app = controls_ui_app();
        assert_eq!(button_label::<OrbitGuideToggleButton>(&mut app), "Hide Orbits (G)");

        app.world_mut().resource_mut::<OrbitGuideVisibility>().enabled = false;
        app.update();

        assert_eq!(button_label::<OrbitGuideToggleButton>(&mut app), "Show Orbits (G)");
    }

    #[test]
    fn test_status_text_tracks_rate() {
        let mut app = controls_ui_app();

        **app.world_mut().resource_mut::<GlobalSimulationRate>() = 0.004;
        app.update();

        let mut query = app.world_mut().query_filtered::<&Text, With<StatusText>>();
        let text = query.single(app.world()).unwrap();
        assert!(text.0.contains("+0.0040"), "{}", text.0);
    }

    #[test]
    fn test_keyboard_handler_writes_events() {
        let mut app = create_test_app_with_catalog();
        app.add_systems(Update, keyboard_input_handler);

        press_logical_key(&mut app, character("3"));
        press_logical_key(&mut app, character("g"));
        app.update();

        let selections = app.world().resource::<Events<SelectBody>>();
        let selected: Vec<_> = selections.get_cursor().read(selections).copied().collect();
        assert_eq!(selected, vec![SelectBody(Some(BodyId(2)))]);

        let commands = app.world().resource::<Events<SimulationCommand>>();
        let sent: Vec<_> = commands.get_cursor().read(commands).copied().collect();
        assert_eq!(sent, vec![SimulationCommand::ToggleOrbitGuides]);
    }
}
