use canvas_core::{BrushSize, Command, ScrollSpeed};
use winit::keyboard::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    Modifier(bool),
}

/// Same bindings as the browser build. Auto-repeat only nudges the length.
pub fn key_action(code: KeyCode, pressed: bool, repeat: bool) -> Option<KeyAction> {
    if matches!(code, KeyCode::ShiftLeft | KeyCode::ShiftRight) {
        return (!(pressed && repeat)).then_some(KeyAction::Modifier(pressed));
    }
    if !pressed {
        return None;
    }
    let command = match code {
        KeyCode::ArrowUp => Command::nudge_length(true),
        KeyCode::ArrowDown => Command::nudge_length(false),
        _ if repeat => return None,
        KeyCode::Space => Command::ToggleRecording,
        KeyCode::KeyC => Command::Clear,
        KeyCode::KeyE => Command::Export,
        KeyCode::Digit1 => Command::SetBrush(BrushSize::Small),
        KeyCode::Digit2 => Command::SetBrush(BrushSize::Medium),
        KeyCode::Digit3 => Command::SetBrush(BrushSize::Large),
        KeyCode::KeyQ => Command::SetSpeed(ScrollSpeed::Slow),
        KeyCode::KeyW => Command::SetSpeed(ScrollSpeed::Medium),
        KeyCode::KeyR => Command::SetSpeed(ScrollSpeed::Fast),
        _ => return None,
    };
    Some(KeyAction::Command(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_press_and_release() {
        assert_eq!(
            key_action(KeyCode::ShiftLeft, true, false),
            Some(KeyAction::Modifier(true))
        );
        assert_eq!(key_action(KeyCode::ShiftRight, true, true), None);
        assert_eq!(
            key_action(KeyCode::ShiftRight, false, false),
            Some(KeyAction::Modifier(false))
        );
    }

    #[test]
    fn space_ignores_repeat_and_release() {
        assert_eq!(
            key_action(KeyCode::Space, true, false),
            Some(KeyAction::Command(Command::ToggleRecording))
        );
        assert_eq!(key_action(KeyCode::Space, true, true), None);
        assert_eq!(key_action(KeyCode::Space, false, false), None);
    }

    #[test]
    fn arrows_repeat() {
        assert_eq!(
            key_action(KeyCode::ArrowDown, true, true),
            Some(KeyAction::Command(Command::AdjustLength(-100)))
        );
    }
}
