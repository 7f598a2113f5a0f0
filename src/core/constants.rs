// Ripple and voice tuning constants shared by the engine and the web frontend.

// Wave propagation
pub const BEATS_TO_TRAVERSE: f32 = 2.0; // beats for the wavefront to cross the full radius
pub const BAND_WIDTH: f32 = 0.6; // gaussian width of the wavefront, in grid units
pub const CYCLE_MARGIN: f32 = 2.0; // travel past max_radius before wrapping to the origin
pub const MIN_RADIUS: f32 = 0.5; // floor for max_radius on degenerate grids

// Triggering
pub const TRIGGER_THRESHOLD: f32 = 0.7;

// Visual pulse left on a cell by its last trigger
pub const PULSE_DECAY_PER_SEC: f32 = 3.0;

// Tempo and speed limits
pub const BPM_MIN: f32 = 30.0;
pub const BPM_MAX: f32 = 240.0;
pub const SPEED_MIN: f32 = 0.25;
pub const SPEED_MAX: f32 = 4.0;

// Pitch mapping: six steps per octave starting at C3
pub const BASE_MIDI: f32 = 48.0;
pub const SCALE_STEPS: [f32; 6] = [0.0, 2.0, 4.0, 7.0, 9.0, 11.0];

// Loudness per colour role
pub const ACCENT_GAIN: f32 = 1.0;
pub const PRIMARY_GAIN: f32 = 0.75;
pub const SECONDARY_GAIN: f32 = 0.5;

// Gestures
pub const LONG_PRESS_MS: f64 = 450.0;
pub const BPM_STEP: f32 = 4.0;
pub const SPEED_STEP_RATIO: f32 = 1.25;
