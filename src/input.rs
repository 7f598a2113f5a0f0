use crate::constants::{GRID_MARGIN_X, GRID_MARGIN_Y};
use crate::core::GridGeometry;
use glam::Vec2;
use instant::Instant;
use web_sys as web;

/// Pointer press in progress: where it started and when.
#[derive(Clone, Copy)]
pub struct PressState {
    pub started: Instant,
    pub cell: Option<(u32, u32)>,
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::splat(-1.0);
    }
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Grid layout for the canvas' current backing size.
#[inline]
pub fn geometry_for(canvas: &web::HtmlCanvasElement, cols: u32, rows: u32) -> GridGeometry {
    GridGeometry::new(
        canvas.width() as f32,
        canvas.height() as f32,
        cols,
        rows,
        GRID_MARGIN_X,
        GRID_MARGIN_Y,
    )
}

#[inline]
pub fn pointer_cell(
    ev: &web::PointerEvent,
    canvas: &web::HtmlCanvasElement,
    cols: u32,
    rows: u32,
) -> Option<(u32, u32)> {
    geometry_for(canvas, cols, rows).cell_at(pointer_canvas_px(ev, canvas))
}
