use egui::{Context, Event, Key, Modifiers};

/// Canvas-level commands reachable from the keyboard and the toolbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ResetCanvas,
    SaveCanvas,
    ToggleRainbow,
}

/// Map a key press to its action. Presses with Ctrl/Cmd/Alt held are ignored.
pub fn action_for_key(key: Key, modifiers: Modifiers) -> Option<Action> {
    if modifiers.command || modifiers.ctrl || modifiers.alt {
        return None;
    }
    match key {
        Key::Backspace => Some(Action::ResetCanvas),
        Key::S => Some(Action::SaveCanvas),
        Key::R => Some(Action::ToggleRainbow),
        _ => None,
    }
}

/// Actions triggered by this frame's key presses.
///
/// Nothing fires while a widget (e.g. a hex color field) holds keyboard focus.
pub fn shortcut_actions(ctx: &Context) -> Vec<Action> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|input| {
        input
            .events
            .iter()
            .filter_map(|event| match event {
                Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => action_for_key(*key, *modifiers),
                _ => None,
            })
            .collect()
    })
}
