//! Distance field and the shared propagation state of the ripple.

use super::cell::Cell;
use super::constants::{BEATS_TO_TRAVERSE, CYCLE_MARGIN, MIN_RADIUS};

/// Euclidean distance in grid-index space from `origin` to every cell, plus the
/// largest of those distances floored at `MIN_RADIUS`.
///
/// Distances are returned in the same order as `cells`.
pub fn compute_distances(origin: (u32, u32), cells: &[Cell]) -> (Vec<f32>, f32) {
    let (oc, or) = (origin.0 as f32, origin.1 as f32);
    let distances: Vec<f32> = cells
        .iter()
        .map(|c| {
            let dc = c.col as f32 - oc;
            let dr = c.row as f32 - or;
            (dc * dc + dr * dr).sqrt()
        })
        .collect();
    let max_radius = distances.iter().copied().fold(0.0_f32, f32::max);
    (distances, max_radius.max(MIN_RADIUS))
}

/// Distance-units per second for a given tempo (beats per second).
#[inline]
pub fn radial_speed(tempo_bps: f32, speed_multiplier: f32, max_radius: f32) -> f32 {
    tempo_bps * speed_multiplier * (max_radius / BEATS_TO_TRAVERSE)
}

/// Floored modulo into `[0, cycle_length)`. Handles any number of wraps.
pub fn wrap_position(position: f32, cycle_length: f32) -> f32 {
    if !position.is_finite() || cycle_length.is_nan() || cycle_length <= 0.0 {
        return 0.0;
    }
    let cycle = cycle_length as f64;
    let wrapped = (position as f64).rem_euclid(cycle) as f32;
    // f32 rounding can land exactly on the upper bound
    if wrapped >= cycle_length {
        0.0
    } else {
        wrapped
    }
}

/// Global propagation state shared by all cells.
#[derive(Clone, Debug)]
pub struct WaveFieldState {
    pub origin: (u32, u32),
    pub max_radius: f32,
    pub cycle_length: f32,
    pub radial_position: f32,
}

impl WaveFieldState {
    /// Build the field for `origin`, writing each cell's distance.
    pub fn new(origin: (u32, u32), cells: &mut [Cell]) -> Self {
        let mut field = Self {
            origin,
            max_radius: MIN_RADIUS,
            cycle_length: MIN_RADIUS + CYCLE_MARGIN,
            radial_position: 0.0,
        };
        field.retarget(origin, cells);
        field
    }

    /// Move the origin and recompute the whole distance field in one step.
    ///
    /// The caller validates that `origin` lies inside the grid.
    pub fn retarget(&mut self, origin: (u32, u32), cells: &mut [Cell]) {
        let (distances, max_radius) = compute_distances(origin, cells);
        for (cell, d) in cells.iter_mut().zip(distances) {
            cell.distance = d;
        }
        self.origin = origin;
        self.max_radius = max_radius;
        self.cycle_length = max_radius + CYCLE_MARGIN;
        self.radial_position = wrap_position(self.radial_position, self.cycle_length);
    }

    /// Advance the wavefront by `dt_sec` and wrap it into the cycle.
    ///
    /// Negative or non-finite steps leave the position unchanged.
    pub fn advance(&mut self, dt_sec: f32, tempo_bps: f32, speed_multiplier: f32) -> f32 {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        let speed = radial_speed(tempo_bps, speed_multiplier, self.max_radius);
        self.radial_position =
            wrap_position(self.radial_position + speed * dt, self.cycle_length);
        self.radial_position
    }
}
