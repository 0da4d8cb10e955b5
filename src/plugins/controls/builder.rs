//! Builder pattern utilities for controls UI
//!
//! This module provides a CommandsExt trait and associated builder types
//! to simplify the creation and management of control buttons in the UI.

use crate::plugins::controls::constants::*;
use crate::prelude::*;
use bevy::ecs::hierarchy::ChildSpawnerCommands;

pub trait ControlsCommandsExt {
    fn spawn_control_button<T: ButtonWithLabel>(&mut self) -> Entity;

    fn spawn_labelled_button(&mut self, marker: impl Bundle, label: String) -> Entity;
}

impl ControlsCommandsExt for ChildSpawnerCommands<'_> {
    fn spawn_control_button<T: ButtonWithLabel>(&mut self) -> Entity {
        self.spawn_labelled_button(T::marker(), T::label())
    }

    fn spawn_labelled_button(&mut self, marker: impl Bundle, label: String) -> Entity {
        self.spawn((
            Button,
            Node {
                width: Val::Px(BUTTON_WIDTH_PX),
                height: Val::Auto,
                padding: UiRect::all(Val::Px(BUTTON_PADDING_PX)),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexStart,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(1.0),
                ..default()
            },
            BorderRadius::all(Val::Px(BUTTON_BORDER_RADIUS_PX)),
            BackgroundColor(BUTTON_COLOR_NORMAL),
            marker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(label),
                TextColor(Color::WHITE),
                TextFont {
                    font_size: BUTTON_FONT_SIZE_PX,
                    ..default()
                },
            ));
        })
        .id()
    }
}

pub trait ButtonWithLabel: Component + 'static {
    /// The command this button triggers
    fn command() -> SimulationCommand;

    /// The marker component instance
    fn marker() -> Self;

    /// The base text for the button (without shortcut)
    fn base_text() -> &'static str;

    /// The keyboard shortcut for this button
    fn shortcut() -> &'static str;

    /// The base text with shortcut appended
    fn label() -> String {
        format!("{} ({})", Self::base_text(), Self::shortcut())
    }
}

/// Replaces the label of every button carrying `T`.
pub fn set_button_label<T: Component>(
    buttons: &Query<&Children, With<T>>,
    texts: &mut Query<&mut Text>,
    label: &str,
) {
    for children in buttons.iter() {
        for child in children.iter() {
            if let Ok(mut text) = texts.get_mut(child) {
                *text = Text::new(label.to_string());
                break;
            }
        }
    }
}
