use serde::Serialize;

/// Shape family drawn for a cell. Each variant fixes how many discrete states
/// the cell cycles through and which synthesis voice it triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphType {
    Circle,
    Bar,
    Block,
    Diagonal,
}

impl GlyphType {
    pub const ALL: [GlyphType; 4] = [
        GlyphType::Circle,
        GlyphType::Bar,
        GlyphType::Block,
        GlyphType::Diagonal,
    ];

    /// Number of discrete states a cell of this glyph cycles through.
    pub fn state_count(self) -> u8 {
        match self {
            GlyphType::Circle => 4,
            GlyphType::Bar => 4,
            GlyphType::Block => 3,
            GlyphType::Diagonal => 2,
        }
    }

    pub fn voice_family(self) -> VoiceFamily {
        match self {
            GlyphType::Circle => VoiceFamily::Bell,
            GlyphType::Bar => VoiceFamily::Tick,
            GlyphType::Block => VoiceFamily::Chord,
            GlyphType::Diagonal => VoiceFamily::Metallic,
        }
    }

    pub fn next(self) -> Self {
        match self {
            GlyphType::Circle => GlyphType::Bar,
            GlyphType::Bar => GlyphType::Block,
            GlyphType::Block => GlyphType::Diagonal,
            GlyphType::Diagonal => GlyphType::Circle,
        }
    }
}

/// Timbral family requested from the audio frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceFamily {
    Bell,
    Tick,
    Chord,
    Metallic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
}

impl ColorRole {
    pub const ALL: [ColorRole; 3] = [ColorRole::Primary, ColorRole::Secondary, ColorRole::Accent];

    pub fn next(self) -> Self {
        match self {
            ColorRole::Primary => ColorRole::Secondary,
            ColorRole::Secondary => ColorRole::Accent,
            ColorRole::Accent => ColorRole::Primary,
        }
    }
}

/// One grid element.
///
/// `col`/`row` never change after the grid is built. `distance` follows the
/// current origin; `amplitude` and `prev_amplitude` are rewritten once per
/// playing frame. `pulse` is the visual flash from the most recent trigger.
#[derive(Clone, Debug)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
    pub distance: f32,
    pub prev_amplitude: f32,
    pub amplitude: f32,
    pub pulse: f32,
    pub glyph: GlyphType,
    pub state: u8,
    pub role: ColorRole,
}

impl Cell {
    pub fn new(col: u32, row: u32, glyph: GlyphType, state: u8, role: ColorRole) -> Self {
        Self {
            col,
            row,
            distance: 0.0,
            prev_amplitude: 0.0,
            amplitude: 0.0,
            pulse: 0.0,
            glyph,
            state: state % glyph.state_count(),
            role,
        }
    }

    /// Discrete state mapped to \[0, 1\]; single-state glyphs map to 0.
    pub fn state_norm(&self) -> f32 {
        let count = self.glyph.state_count();
        if count <= 1 {
            0.0
        } else {
            self.state as f32 / (count - 1) as f32
        }
    }

    pub fn cycle_state(&mut self) {
        self.state = (self.state + 1) % self.glyph.state_count();
    }

    /// Switch to the next glyph. State restarts at 0 so it stays in range.
    pub fn cycle_glyph(&mut self) {
        self.glyph = self.glyph.next();
        self.state = 0;
    }

    pub fn cycle_role(&mut self) {
        self.role = self.role.next();
    }
}
