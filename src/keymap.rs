use canvas_core::{BrushSize, Command, ScrollSpeed};

/// What a key press or release means to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    /// Full-paint modifier pressed (`true`) or released (`false`).
    Modifier(bool),
}

#[inline]
pub fn is_modifier_code(code: &str) -> bool {
    matches!(code, "ShiftLeft" | "ShiftRight")
}

/// `KeyboardEvent.code` on keydown. Auto-repeat only nudges the canvas length.
pub fn keydown_action(code: &str, repeat: bool) -> Option<KeyAction> {
    if is_modifier_code(code) {
        return (!repeat).then_some(KeyAction::Modifier(true));
    }
    let command = match code {
        "ArrowUp" => Command::nudge_length(true),
        "ArrowDown" => Command::nudge_length(false),
        _ if repeat => return None,
        "Space" => Command::ToggleRecording,
        "KeyC" => Command::Clear,
        "KeyE" => Command::Export,
        "Digit1" => Command::SetBrush(BrushSize::Small),
        "Digit2" => Command::SetBrush(BrushSize::Medium),
        "Digit3" => Command::SetBrush(BrushSize::Large),
        "KeyQ" => Command::SetSpeed(ScrollSpeed::Slow),
        "KeyW" => Command::SetSpeed(ScrollSpeed::Medium),
        "KeyR" => Command::SetSpeed(ScrollSpeed::Fast),
        _ => return None,
    };
    Some(KeyAction::Command(command))
}

#[inline]
pub fn keyup_action(code: &str) -> Option<KeyAction> {
    is_modifier_code(code).then_some(KeyAction::Modifier(false))
}

/// Keys whose browser default (page scroll) must be suppressed.
#[inline]
pub fn swallows_default(code: &str) -> bool {
    matches!(code, "Space" | "ArrowUp" | "ArrowDown")
}
