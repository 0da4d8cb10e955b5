//! Body list buttons, one per catalog entry

use crate::plugins::controls::constants::*;
use crate::plugins::selection::Selection;
use crate::prelude::*;
use bevy::window::SystemCursorIcon;
use bevy::winit::cursor::CursorIcon;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyButton {
    pub id: BodyId,
}

/// Keyboard digit that selects the body at `id`, for the first nine bodies.
pub fn body_shortcut(id: BodyId) -> Option<char> {
    if id.0 < 9 {
        char::from_digit(id.0 as u32 + 1, 10)
    } else {
        None
    }
}

pub fn body_button_label(id: BodyId, name: &str) -> String {
    match body_shortcut(id) {
        Some(key) => format!("{name} ({key})"),
        None => name.to_string(),
    }
}

fn idle_color(selection: &Selection, button: &BodyButton) -> Color {
    if selection.selected() == Some(button.id) {
        BUTTON_COLOR_SELECTED
    } else {
        BUTTON_COLOR_NORMAL
    }
}

pub fn body_button_interaction_handler(
    mut commands: Commands,
    window: Single<Entity, With<Window>>,
    selection: Res<Selection>,
    mut interaction_query: Query<
        (&Interaction, &BodyButton, &mut BackgroundColor),
        Changed<Interaction>,
    >,
    mut select_writer: EventWriter<SelectBody>,
) {
    for (interaction, button, mut color) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                commands
                    .entity(*window)
                    .insert(CursorIcon::System(SystemCursorIcon::Pointer));

                *color = BackgroundColor(BUTTON_COLOR_PRESSED);
                // Pressing the selected body again deselects it
                let request = if selection.selected() == Some(button.id) {
                    None
                } else {
                    Some(button.id)
                };
                select_writer.write(SelectBody(request));
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

                *color = BackgroundColor(idle_color(&selection, button));
            }
        }
    }
}

pub fn sync_body_button_colors(
    selection: Res<Selection>,
    mut buttons: Query<(&BodyButton, &Interaction, &mut BackgroundColor)>,
) {
    if !selection.is_changed() {
        return;
    }

    for (button, interaction, mut color) in &mut buttons {
        if *interaction == Interaction::None {
            *color = BackgroundColor(idle_color(&selection, button));
        }
    }
}
