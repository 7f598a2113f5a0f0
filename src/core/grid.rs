use glam::Vec2;

/// Axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

/// Maps grid indices to square pixel cells tiling a centred region of the canvas.
///
/// The usable area is the canvas minus `margin_x`/`margin_y` (fractions of the
/// canvas size) on each side. Cells are sized by whichever axis is tighter, and
/// the resulting block is centred in the canvas.
#[derive(Clone, Debug)]
pub struct GridGeometry {
    pub cols: u32,
    pub rows: u32,
    cell_size: f32,
    offset: Vec2,
}

impl GridGeometry {
    pub fn new(
        canvas_w: f32,
        canvas_h: f32,
        cols: u32,
        rows: u32,
        margin_x: f32,
        margin_y: f32,
    ) -> Self {
        let canvas_w = canvas_w.max(0.0);
        let canvas_h = canvas_h.max(0.0);
        let avail_w = canvas_w * (1.0 - 2.0 * margin_x.clamp(0.0, 0.5));
        let avail_h = canvas_h * (1.0 - 2.0 * margin_y.clamp(0.0, 0.5));
        let cell_size = if cols == 0 || rows == 0 {
            0.0
        } else {
            (avail_w / cols as f32).min(avail_h / rows as f32)
        };
        let block = Vec2::new(cell_size * cols as f32, cell_size * rows as f32);
        let offset = (Vec2::new(canvas_w, canvas_h) - block) * 0.5;
        Self {
            cols,
            rows,
            cell_size,
            offset,
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn cell_rect(&self, col: u32, row: u32) -> Rect {
        Rect {
            x: self.offset.x + col as f32 * self.cell_size,
            y: self.offset.y + row as f32 * self.cell_size,
            w: self.cell_size,
            h: self.cell_size,
        }
    }

    /// Inverse of `cell_rect`: which cell, if any, contains the pixel `p`.
    pub fn cell_at(&self, p: Vec2) -> Option<(u32, u32)> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let local = (p - self.offset) / self.cell_size;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let col = local.x.floor() as u32;
        let row = local.y.floor() as u32;
        (col < self.cols && row < self.rows).then_some((col, row))
    }
}
