use super::cell::{Cell, ColorRole, VoiceFamily};
use super::constants::{
    ACCENT_GAIN, BASE_MIDI, PRIMARY_GAIN, SCALE_STEPS, SECONDARY_GAIN,
};

/// Parameters for a single synthesized tone, consumed by the audio frontend.
///
/// - `family`: which timbre to build (bell, tick, chord cluster, metallic FM)
/// - `frequency_hz`: fundamental after the family's ratio is applied
/// - `duration_sec`: envelope length
/// - `gain`: peak level in \[0, 1\]
/// - `pan`: stereo position in \[-1, 1\], left to right
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoiceRequest {
    pub family: VoiceFamily,
    pub frequency_hz: f32,
    pub duration_sec: f32,
    pub gain: f32,
    pub pan: f32,
}

/// Per-family shaping applied on top of the shared pitch/level mapping.
#[derive(Clone, Copy, Debug)]
pub struct FamilyProfile {
    pub frequency_ratio: f32,
    pub min_duration: f32,
    pub max_duration: f32,
    // how much duration follows cell state (1.0) versus trigger intensity (0.0)
    pub state_weight: f32,
}

impl VoiceFamily {
    pub fn profile(self) -> FamilyProfile {
        match self {
            VoiceFamily::Bell => FamilyProfile {
                frequency_ratio: 2.0,
                min_duration: 0.6,
                max_duration: 2.4,
                state_weight: 1.0,
            },
            VoiceFamily::Tick => FamilyProfile {
                frequency_ratio: 4.0,
                min_duration: 0.04,
                max_duration: 0.18,
                state_weight: 0.0,
            },
            VoiceFamily::Chord => FamilyProfile {
                frequency_ratio: 1.0,
                min_duration: 0.5,
                max_duration: 1.6,
                state_weight: 0.7,
            },
            VoiceFamily::Metallic => FamilyProfile {
                frequency_ratio: 1.5,
                min_duration: 0.2,
                max_duration: 1.1,
                state_weight: 0.5,
            },
        }
    }
}

impl ColorRole {
    pub fn gain_multiplier(self) -> f32 {
        match self {
            ColorRole::Accent => ACCENT_GAIN,
            ColorRole::Primary => PRIMARY_GAIN,
            ColorRole::Secondary => SECONDARY_GAIN,
        }
    }
}

/// Convert a MIDI note number to Hertz (A4=440 Hz).
pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}

/// Shared base pitch for a row. The bottom row is the lowest note; each row up
/// moves one step along `SCALE_STEPS`, wrapping into the next octave.
pub fn row_midi(row: u32, rows: u32) -> f32 {
    let degree = rows.saturating_sub(1).saturating_sub(row) as usize;
    let octave = (degree / SCALE_STEPS.len()) as f32;
    BASE_MIDI + 12.0 * octave + SCALE_STEPS[degree % SCALE_STEPS.len()]
}

/// Column mapped to \[-1, 1\]; a single column sits in the centre.
pub fn column_pan(col: u32, cols: u32) -> f32 {
    if cols <= 1 {
        return 0.0;
    }
    (col as f32 / (cols - 1) as f32 * 2.0 - 1.0).clamp(-1.0, 1.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map a triggered cell to the voice it should sound. Pure; the caller decides
/// whether audio is available.
pub fn dispatch(cell: &Cell, cols: u32, rows: u32, intensity: f32) -> VoiceRequest {
    let family = cell.glyph.voice_family();
    let profile = family.profile();
    let intensity = intensity.clamp(0.0, 1.0);

    let frequency_hz = midi_to_hz(row_midi(cell.row, rows)) * profile.frequency_ratio;
    let t = (profile.state_weight * cell.state_norm()
        + (1.0 - profile.state_weight) * intensity)
        .clamp(0.0, 1.0);
    let duration_sec = lerp(profile.min_duration, profile.max_duration, t);
    let gain = (cell.role.gain_multiplier() * intensity).clamp(0.0, 1.0);

    VoiceRequest {
        family,
        frequency_hz,
        duration_sec,
        gain,
        pan: column_pan(cell.col, cols),
    }
}
