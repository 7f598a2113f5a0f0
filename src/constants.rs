// Frontend layout, palette and audio tuning. Ripple constants live in `core::constants`.

// DOM ids
pub const CANVAS_ID: &str = "app-canvas";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const START_BUTTON_ID: &str = "overlay-ok";
pub const HUD_ID: &str = "hud";

// Layout
pub const GRID_MARGIN_X: f32 = 0.08; // fraction of canvas width left empty on each side
pub const GRID_MARGIN_Y: f32 = 0.08;
pub const GLYPH_INSET: f32 = 0.12; // fraction of a cell kept clear around its glyph

// Palette (CSS rgb components) per colour role
pub const BACKGROUND_CSS: &str = "#0b0e16";
pub const PRIMARY_RGB: [u8; 3] = [232, 226, 210];
pub const SECONDARY_RGB: [u8; 3] = [96, 128, 168];
pub const ACCENT_RGB: [u8; 3] = [240, 108, 72];
pub const ORIGIN_MARK_CSS: &str = "rgba(255,255,255,0.55)";

// Brightness mapping
pub const IDLE_ALPHA: f32 = 0.22; // glyph alpha with no wave present
pub const WAVE_ALPHA_SPAN: f32 = 0.6; // added alpha at full amplitude
pub const PULSE_ALPHA_SPAN: f32 = 0.35; // added alpha at a fresh trigger
pub const PAUSED_DIM: f32 = 0.6;
pub const PULSE_GROW: f32 = 0.18; // glyph scale boost at a fresh trigger

// Audio
pub const MASTER_GAIN: f32 = 0.3;
pub const VOICE_ATTACK_SEC: f64 = 0.006;
pub const VOICE_START_DELAY_SEC: f64 = 0.005;
pub const ENVELOPE_FLOOR: f32 = 0.0001; // exponential ramps cannot reach zero
pub const BELL_PARTIAL_RATIO: f32 = 2.76;
pub const CHORD_RATIOS: [f32; 3] = [1.0, 1.26, 1.5];
pub const FM_MOD_RATIO: f32 = 1.41;
pub const FM_INDEX: f32 = 2.2; // modulator depth as a multiple of carrier frequency
