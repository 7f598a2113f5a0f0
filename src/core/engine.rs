use super::cell::{Cell, ColorRole, GlyphType};
use super::constants::*;
use super::controls::CellAction;
use super::error::CoreError;
use super::field::WaveFieldState;
use super::ripple::{detect_stage, sample_stage, Triggers};
use super::snapshot::{CellSnapshot, SceneSnapshot};
use super::voice::{dispatch, VoiceRequest};
use rand::prelude::*;
use std::time::Duration;

/// Engine parameters controlling grid size and ripple tempo.
///
/// - `bpm` sets how fast the wavefront travels (it crosses the field in
///   `BEATS_TO_TRAVERSE` beats at speed 1.0)
/// - `speed_multiplier` scales that travel speed
/// - `cols`/`rows` size the grid
/// - `seed` drives the initial glyph/state/role layout
#[derive(Clone, Debug)]
pub struct RippleParams {
    pub bpm: f32,
    pub speed_multiplier: f32,
    pub cols: u32,
    pub rows: u32,
    pub seed: u64,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            bpm: 96.0,
            speed_multiplier: 1.0,
            cols: 12,
            rows: 9,
            seed: 42,
        }
    }
}

/// Owns the grid and the wave field and runs the per-frame ripple pipeline.
///
/// Typical usage:
/// - Construct with `RippleEngine::new(params)`
/// - Call `tick(dt, &mut out_voices)` once per animation frame
/// - Use `apply_action`, `set_origin`, `reseed` and `resize_grid` from input
///   handlers; they take effect before the next tick samples amplitudes
pub struct RippleEngine {
    pub params: RippleParams,
    cells: Vec<Cell>,
    field: WaveFieldState,
    playing: bool,
    rng: StdRng,
}

impl RippleEngine {
    pub fn new(params: RippleParams) -> Result<Self, CoreError> {
        check_dims(params.cols, params.rows)?;
        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut cells = build_cells(params.cols, params.rows, &mut rng);
        let origin = (params.cols / 2, params.rows / 2);
        let field = WaveFieldState::new(origin, &mut cells);
        let mut params = params;
        params.bpm = params.bpm.clamp(BPM_MIN, BPM_MAX);
        params.speed_multiplier = params.speed_multiplier.clamp(SPEED_MIN, SPEED_MAX);
        log::info!(
            "[engine] grid={}x{} origin=({},{}) max_radius={:.2}",
            params.cols,
            params.rows,
            origin.0,
            origin.1,
            field.max_radius
        );
        Ok(Self {
            params,
            cells,
            field,
            playing: false,
            rng,
        })
    }

    pub fn cols(&self) -> u32 {
        self.params.cols
    }

    pub fn rows(&self) -> u32 {
        self.params.rows
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn field(&self) -> &WaveFieldState {
        &self.field
    }

    pub fn cell_index(&self, col: u32, row: u32) -> Option<usize> {
        (col < self.params.cols && row < self.params.rows)
            .then(|| (row * self.params.cols + col) as usize)
    }

    pub fn cell(&self, col: u32, row: u32) -> Option<&Cell> {
        self.cell_index(col, row).map(|i| &self.cells[i])
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn toggle_playing(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn set_bpm(&mut self, bpm: f32) {
        self.params.bpm = bpm.clamp(BPM_MIN, BPM_MAX);
    }

    pub fn adjust_bpm(&mut self, delta: f32) {
        self.set_bpm(self.params.bpm + delta);
    }

    pub fn set_speed_multiplier(&mut self, speed: f32) {
        self.params.speed_multiplier = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    /// Move the ripple origin. The distance field is rebuilt immediately and the
    /// wavefront restarts from the new origin.
    pub fn set_origin(&mut self, col: u32, row: u32) -> Result<(), CoreError> {
        if self.cell_index(col, row).is_none() {
            return Err(CoreError::OutOfBounds {
                col,
                row,
                cols: self.params.cols,
                rows: self.params.rows,
            });
        }
        self.field.radial_position = 0.0;
        self.field.retarget((col, row), &mut self.cells);
        log::debug!(
            "[engine] origin=({},{}) max_radius={:.2}",
            col,
            row,
            self.field.max_radius
        );
        Ok(())
    }

    pub fn center_origin(&mut self) {
        let (col, row) = (self.params.cols / 2, self.params.rows / 2);
        // the centre is always inside a non-empty grid
        _ = self.set_origin(col, row);
    }

    /// Apply a pointer edit to one cell.
    pub fn apply_action(&mut self, col: u32, row: u32, action: CellAction) -> Result<(), CoreError> {
        if action == CellAction::SetOrigin {
            return self.set_origin(col, row);
        }
        let (cols, rows) = (self.params.cols, self.params.rows);
        let index = self
            .cell_index(col, row)
            .ok_or(CoreError::OutOfBounds { col, row, cols, rows })?;
        let cell = &mut self.cells[index];
        match action {
            CellAction::CycleState => cell.cycle_state(),
            CellAction::CycleGlyph => cell.cycle_glyph(),
            CellAction::CycleRole => cell.cycle_role(),
            CellAction::SetOrigin => {}
        }
        Ok(())
    }

    /// Rebuild every cell's glyph, state and role. If `seed` is None, a new
    /// random seed is drawn from the current RNG.
    pub fn reseed(&mut self, seed: Option<u64>) {
        let new_seed = seed.unwrap_or_else(|| self.rng.gen());
        self.rng = StdRng::seed_from_u64(new_seed);
        self.params.seed = new_seed;
        self.rebuild(self.field.origin);
        log::info!("[engine] reseed {}", new_seed);
    }

    /// Change the grid size. The origin is clamped into the new grid.
    pub fn resize_grid(&mut self, cols: u32, rows: u32) -> Result<(), CoreError> {
        check_dims(cols, rows)?;
        self.params.cols = cols;
        self.params.rows = rows;
        let origin = (self.field.origin.0.min(cols - 1), self.field.origin.1.min(rows - 1));
        self.rebuild(origin);
        log::info!("[engine] grid={}x{}", cols, rows);
        Ok(())
    }

    fn rebuild(&mut self, origin: (u32, u32)) {
        self.cells = build_cells(self.params.cols, self.params.rows, &mut self.rng);
        self.field.radial_position = 0.0;
        self.field.retarget(origin, &mut self.cells);
    }

    /// Run one frame: decay pulses, then (while playing) advance the
    /// wavefront, sample every cell against that single position, detect
    /// crossings and dispatch one voice per crossing into `out_voices`.
    ///
    /// Returns this frame's triggers in cell order.
    pub fn tick(&mut self, dt: Duration, out_voices: &mut Vec<VoiceRequest>) -> Triggers {
        let dt_sec = dt.as_secs_f32();
        decay_pulses(&mut self.cells, dt_sec);

        let mut triggers = Triggers::new();
        if !self.playing {
            return triggers;
        }

        let tempo_bps = self.params.bpm / 60.0;
        let radial_position = self
            .field
            .advance(dt_sec, tempo_bps, self.params.speed_multiplier);
        let amplitudes = sample_stage(&self.cells, radial_position);
        detect_stage(&mut self.cells, &amplitudes, &mut triggers);

        let (cols, rows) = (self.params.cols, self.params.rows);
        for t in &triggers {
            let cell = &mut self.cells[t.index];
            cell.pulse = cell.pulse.max(t.intensity);
            out_voices.push(dispatch(cell, cols, rows, t.intensity));
        }
        triggers
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            cols: self.params.cols,
            rows: self.params.rows,
            origin_col: self.field.origin.0,
            origin_row: self.field.origin.1,
            cells: self
                .cells
                .iter()
                .map(|c| CellSnapshot {
                    glyph: c.glyph,
                    state: c.state,
                    role: c.role,
                })
                .collect(),
        }
    }
}

fn check_dims(cols: u32, rows: u32) -> Result<(), CoreError> {
    if cols == 0 || rows == 0 {
        return Err(CoreError::EmptyGrid { cols, rows });
    }
    Ok(())
}

/// Row-major cells with random glyph, state and role.
fn build_cells(cols: u32, rows: u32, rng: &mut StdRng) -> Vec<Cell> {
    let mut cells = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let glyph = *GlyphType::ALL.choose(rng).unwrap_or(&GlyphType::Circle);
            let state = rng.gen_range(0..glyph.state_count());
            // accents stay rare so they read as highlights
            let role = match rng.gen::<f32>() {
                x if x < 0.12 => ColorRole::Accent,
                x if x < 0.55 => ColorRole::Secondary,
                _ => ColorRole::Primary,
            };
            cells.push(Cell::new(col, row, glyph, state, role));
        }
    }
    cells
}

#[inline]
fn decay_pulses(cells: &mut [Cell], dt_sec: f32) {
    let decay = (-dt_sec.max(0.0) * PULSE_DECAY_PER_SEC).exp();
    for c in cells {
        c.pulse *= decay;
    }
}
