//! Per-frame ripple stages: amplitude sampling and threshold-crossing detection.
//!
//! Both stages are pure over their inputs so a frame can be replayed in tests
//! without any rendering or audio context.

use super::cell::Cell;
use super::constants::{BAND_WIDTH, TRIGGER_THRESHOLD};
use smallvec::SmallVec;

/// A cell's amplitude crossed the trigger threshold from below this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trigger {
    pub index: usize,
    pub intensity: f32,
}

pub type Triggers = SmallVec<[Trigger; 16]>;

/// Gaussian bump of width `BAND_WIDTH` centred on the wavefront. Result is in (0, 1].
#[inline]
pub fn sample_amplitude(distance: f32, radial_position: f32) -> f32 {
    let x = (distance - radial_position).abs() / BAND_WIDTH;
    (-0.5 * x * x).exp().clamp(0.0, 1.0)
}

/// Upward crossing with an inclusive upper side: `prev < T <= curr`.
#[inline]
pub fn crosses_threshold(prev: f32, curr: f32) -> bool {
    prev < TRIGGER_THRESHOLD && curr >= TRIGGER_THRESHOLD
}

/// Sample every cell against one radial position.
pub fn sample_stage(cells: &[Cell], radial_position: f32) -> Vec<f32> {
    cells
        .iter()
        .map(|c| sample_amplitude(c.distance, radial_position))
        .collect()
}

/// Store this frame's amplitudes and collect upward crossings.
///
/// Each cell's previous amplitude is compared before it is overwritten, so a
/// cell fires at most once per pass of the wavefront.
pub fn detect_stage(cells: &mut [Cell], amplitudes: &[f32], out: &mut Triggers) {
    for (index, (cell, &amp)) in cells.iter_mut().zip(amplitudes).enumerate() {
        cell.amplitude = amp;
        if crosses_threshold(cell.prev_amplitude, amp) {
            out.push(Trigger {
                index,
                intensity: amp,
            });
        }
        cell.prev_amplitude = amp;
    }
}
