// Host-side tests for engine lifecycle and cell interaction.

use ripple_lab::core::*;
use std::time::Duration;

fn make_engine(seed: u64) -> RippleEngine {
    RippleEngine::new(RippleParams {
        cols: 8,
        rows: 6,
        seed,
        ..RippleParams::default()
    })
    .expect("non-empty grid")
}

#[test]
fn default_params_build_centered_origin() {
    let engine = RippleEngine::new(RippleParams::default()).unwrap();
    assert_eq!(engine.cells().len(), 12 * 9);
    assert_eq!(engine.field().origin, (6, 4));
    assert!(!engine.is_playing(), "engine starts paused until the user starts it");
    for (i, c) in engine.cells().iter().enumerate() {
        assert_eq!(engine.cell_index(c.col, c.row), Some(i), "row-major layout");
        assert!(c.state < c.glyph.state_count());
    }
}

#[test]
fn empty_grid_is_rejected() {
    let err = RippleEngine::new(RippleParams {
        cols: 0,
        ..RippleParams::default()
    })
    .err()
    .expect("zero columns");
    assert_eq!(err, CoreError::EmptyGrid { cols: 0, rows: 9 });
}

#[test]
fn tempo_and_speed_are_clamped() {
    let mut engine = make_engine(1);
    engine.set_bpm(1000.0);
    assert_eq!(engine.params.bpm, constants::BPM_MAX);
    engine.adjust_bpm(-10_000.0);
    assert_eq!(engine.params.bpm, constants::BPM_MIN);
    engine.set_speed_multiplier(0.0);
    assert_eq!(engine.params.speed_multiplier, constants::SPEED_MIN);
    engine.set_speed_multiplier(100.0);
    assert_eq!(engine.params.speed_multiplier, constants::SPEED_MAX);
}

#[test]
fn toggle_playing_flips_state() {
    let mut engine = make_engine(1);
    assert!(engine.toggle_playing());
    assert!(engine.is_playing());
    assert!(!engine.toggle_playing());
}

#[test]
fn cycle_state_wraps_at_glyph_count() {
    let mut engine = make_engine(3);
    let count = engine.cell(2, 2).unwrap().glyph.state_count();
    let start = engine.cell(2, 2).unwrap().state;
    for _ in 0..count {
        engine.apply_action(2, 2, CellAction::CycleState).unwrap();
    }
    assert_eq!(engine.cell(2, 2).unwrap().state, start);
}

#[test]
fn cycle_glyph_resets_state() {
    let mut engine = make_engine(3);
    let before = engine.cell(1, 1).unwrap().glyph;
    engine.apply_action(1, 1, CellAction::CycleGlyph).unwrap();
    let c = engine.cell(1, 1).unwrap();
    assert_eq!(c.glyph, before.next());
    assert_eq!(c.state, 0);
}

#[test]
fn cycle_role_returns_after_three_steps() {
    let mut engine = make_engine(3);
    let before = engine.cell(0, 5).unwrap().role;
    for _ in 0..ColorRole::ALL.len() {
        engine.apply_action(0, 5, CellAction::CycleRole).unwrap();
    }
    assert_eq!(engine.cell(0, 5).unwrap().role, before);
}

#[test]
fn states_stay_in_range_under_mixed_edits() {
    let mut engine = make_engine(9);
    let actions = [
        CellAction::CycleState,
        CellAction::CycleState,
        CellAction::CycleGlyph,
        CellAction::CycleState,
        CellAction::CycleRole,
        CellAction::CycleState,
    ];
    for step in 0..200 {
        let action = actions[step % actions.len()];
        let (col, row) = ((step % 8) as u32, (step % 6) as u32);
        engine.apply_action(col, row, action).unwrap();
    }
    for c in engine.cells() {
        assert!(c.state < c.glyph.state_count(), "{c:?}");
    }
}

#[test]
fn edits_outside_grid_are_rejected() {
    let mut engine = make_engine(3);
    assert!(matches!(
        engine.apply_action(8, 0, CellAction::CycleState),
        Err(CoreError::OutOfBounds { .. })
    ));
    assert!(matches!(
        engine.apply_action(0, 6, CellAction::SetOrigin),
        Err(CoreError::OutOfBounds { .. })
    ));
}

#[test]
fn set_origin_action_moves_origin() {
    let mut engine = make_engine(3);
    engine.apply_action(1, 2, CellAction::SetOrigin).unwrap();
    assert_eq!(engine.field().origin, (1, 2));
    assert_eq!(engine.field().radial_position, 0.0);
    engine.center_origin();
    assert_eq!(engine.field().origin, (4, 3));
}

#[test]
fn same_seed_builds_same_scene() {
    let a = make_engine(1234);
    let b = make_engine(1234);
    assert_eq!(a.snapshot(), b.snapshot());

    let mut c = make_engine(1);
    let mut d = make_engine(2);
    c.reseed(Some(77));
    d.reseed(Some(77));
    assert_eq!(c.snapshot().cells, d.snapshot().cells);
    assert_eq!(c.params.seed, 77);
}

#[test]
fn reseed_keeps_origin_and_grid() {
    let mut engine = make_engine(5);
    engine.set_origin(2, 1).unwrap();
    engine.reseed(None);
    assert_eq!(engine.field().origin, (2, 1));
    assert_eq!(engine.cells().len(), 48);
    assert_eq!(engine.cell(2, 1).unwrap().distance, 0.0);
}

#[test]
fn resize_rebuilds_and_clamps_origin() {
    let mut engine = make_engine(5);
    engine.set_origin(7, 5).unwrap();
    engine.resize_grid(4, 3).unwrap();
    assert_eq!(engine.cells().len(), 12);
    assert_eq!(engine.field().origin, (3, 2));
    let expected = (3.0_f32 * 3.0 + 2.0 * 2.0).sqrt();
    assert!((engine.field().max_radius - expected).abs() < 1e-6);

    assert_eq!(
        engine.resize_grid(4, 0),
        Err(CoreError::EmptyGrid { cols: 4, rows: 0 })
    );
    assert_eq!(engine.cells().len(), 12, "failed resize leaves the grid alone");
}

#[test]
fn triggers_leave_visual_pulse() {
    let mut engine = make_engine(5);
    engine.set_playing(true);
    let mut voices = Vec::new();
    let triggers = engine.tick(Duration::from_millis(500), &mut voices);
    assert!(!triggers.is_empty());
    for t in &triggers {
        let c = &engine.cells()[t.index];
        assert!(c.pulse >= t.intensity - 1e-6);
    }
    engine.tick(Duration::from_millis(16), &mut voices);
    let t = triggers[0];
    assert!(engine.cells()[t.index].pulse < t.intensity);
}

#[test]
fn voices_match_triggered_cells() {
    let mut engine = make_engine(11);
    engine.set_playing(true);
    let mut voices = Vec::new();
    let triggers = engine.tick(Duration::from_millis(500), &mut voices);
    assert_eq!(voices.len(), triggers.len());
    for (t, v) in triggers.iter().zip(&voices) {
        let c = &engine.cells()[t.index];
        assert_eq!(*v, dispatch(c, engine.cols(), engine.rows(), t.intensity));
    }
}

#[test]
fn snapshot_serializes_scene() {
    let mut engine = make_engine(8);
    engine.set_origin(3, 2).unwrap();
    let snap = engine.snapshot();
    assert_eq!((snap.cols, snap.rows), (8, 6));
    assert_eq!((snap.origin_col, snap.origin_row), (3, 2));
    assert_eq!(snap.cells.len(), 48);

    let json = snap.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["cols"], 8);
    assert_eq!(value["origin_row"], 2);
    let first = &value["cells"][0];
    let glyph = first["glyph"].as_str().unwrap();
    assert!(["circle", "bar", "block", "diagonal"].contains(&glyph));
    let role = first["role"].as_str().unwrap();
    assert!(["primary", "secondary", "accent"].contains(&role));
}
