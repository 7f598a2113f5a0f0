// Host-side tests for pure pointer and keyboard mappings.

use ripple_lab::core::constants::LONG_PRESS_MS;
use ripple_lab::core::*;

#[test]
fn press_duration_splits_tap_and_long_press() {
    assert_eq!(classify_press(0.0), PressKind::Tap);
    assert_eq!(classify_press(LONG_PRESS_MS - 0.1), PressKind::Tap);
    assert_eq!(classify_press(LONG_PRESS_MS), PressKind::LongPress);
    assert_eq!(classify_press(5_000.0), PressKind::LongPress);
}

#[test]
fn taps_pick_edit_from_modifiers() {
    assert_eq!(action_for_press(PressKind::Tap, false, false), CellAction::CycleState);
    assert_eq!(action_for_press(PressKind::Tap, true, false), CellAction::CycleGlyph);
    assert_eq!(action_for_press(PressKind::Tap, false, true), CellAction::CycleRole);
    assert_eq!(action_for_press(PressKind::Tap, true, true), CellAction::CycleRole);
}

#[test]
fn long_press_always_moves_origin() {
    for (shift, alt) in [(false, false), (true, false), (false, true), (true, true)] {
        assert_eq!(
            action_for_press(PressKind::LongPress, shift, alt),
            CellAction::SetOrigin
        );
    }
}

#[test]
fn command_for_key_valid_keys() {
    assert_eq!(command_for_key(" "), Some(KeyCommand::TogglePlay));
    assert_eq!(command_for_key("ArrowUp"), Some(KeyCommand::TempoUp));
    assert_eq!(command_for_key("+"), Some(KeyCommand::TempoUp));
    assert_eq!(command_for_key("ArrowDown"), Some(KeyCommand::TempoDown));
    assert_eq!(command_for_key("-"), Some(KeyCommand::TempoDown));
    assert_eq!(command_for_key("]"), Some(KeyCommand::SpeedUp));
    assert_eq!(command_for_key("["), Some(KeyCommand::SpeedDown));
    assert_eq!(command_for_key("r"), Some(KeyCommand::Reseed));
    assert_eq!(command_for_key("R"), Some(KeyCommand::Reseed));
    assert_eq!(command_for_key("s"), Some(KeyCommand::Export));
    assert_eq!(command_for_key("h"), Some(KeyCommand::ToggleOverlay));
    assert_eq!(command_for_key("C"), Some(KeyCommand::CenterOrigin));
}

#[test]
fn command_for_key_invalid_keys() {
    for key in ["x", "Enter", "Escape", "1", "", "Shift"] {
        assert_eq!(command_for_key(key), None, "key {key:?}");
    }
}
