//! Input classification shared by the pointer and keyboard handlers.

use super::constants::LONG_PRESS_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressKind {
    Tap,
    LongPress,
}

/// What a press on a cell does to that cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellAction {
    CycleState,
    CycleGlyph,
    CycleRole,
    SetOrigin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePlay,
    TempoUp,
    TempoDown,
    SpeedUp,
    SpeedDown,
    Reseed,
    Export,
    ToggleOverlay,
    CenterOrigin,
}

#[inline]
pub fn classify_press(held_ms: f64) -> PressKind {
    if held_ms >= LONG_PRESS_MS {
        PressKind::LongPress
    } else {
        PressKind::Tap
    }
}

/// Long press always moves the origin; taps pick an edit from the modifiers
/// (alt wins over shift).
#[inline]
pub fn action_for_press(kind: PressKind, shift: bool, alt: bool) -> CellAction {
    match kind {
        PressKind::LongPress => CellAction::SetOrigin,
        PressKind::Tap if alt => CellAction::CycleRole,
        PressKind::Tap if shift => CellAction::CycleGlyph,
        PressKind::Tap => CellAction::CycleState,
    }
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        " " => Some(KeyCommand::TogglePlay),
        "ArrowUp" | "ArrowRight" | "+" | "=" => Some(KeyCommand::TempoUp),
        "ArrowDown" | "ArrowLeft" | "-" | "_" => Some(KeyCommand::TempoDown),
        "]" => Some(KeyCommand::SpeedUp),
        "[" => Some(KeyCommand::SpeedDown),
        "r" | "R" => Some(KeyCommand::Reseed),
        "s" | "S" => Some(KeyCommand::Export),
        "h" | "H" => Some(KeyCommand::ToggleOverlay),
        "c" | "C" => Some(KeyCommand::CenterOrigin),
        _ => None,
    }
}
