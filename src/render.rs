use crate::constants::*;
use crate::core::{Cell, ColorRole, GlyphType, GridGeometry, Rect};
use std::f64::consts::{FRAC_PI_4, TAU};
use web_sys as web;

fn role_css(role: ColorRole) -> String {
    let [r, g, b] = match role {
        ColorRole::Primary => PRIMARY_RGB,
        ColorRole::Secondary => SECONDARY_RGB,
        ColorRole::Accent => ACCENT_RGB,
    };
    format!("rgb({},{},{})", r, g, b)
}

/// Alpha for a cell from its wave amplitude and trigger pulse.
#[inline]
fn cell_alpha(cell: &Cell, playing: bool) -> f64 {
    let a = IDLE_ALPHA + WAVE_ALPHA_SPAN * cell.amplitude + PULSE_ALPHA_SPAN * cell.pulse;
    let a = if playing { a } else { a * PAUSED_DIM };
    a.clamp(0.0, 1.0) as f64
}

/// Draw the whole grid. Reads cached amplitudes, so it is safe to call while paused.
pub fn draw_scene(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    geometry: &GridGeometry,
    cells: &[Cell],
    origin: (u32, u32),
    playing: bool,
) {
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(BACKGROUND_CSS);
    ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    for cell in cells {
        let rect = geometry.cell_rect(cell.col, cell.row);
        draw_cell(ctx, rect, cell, playing);
    }

    let r = geometry.cell_rect(origin.0, origin.1);
    ctx.set_global_alpha(1.0);
    ctx.set_stroke_style_str(ORIGIN_MARK_CSS);
    ctx.set_line_width(1.5);
    ctx.stroke_rect(r.x as f64 + 1.0, r.y as f64 + 1.0, r.w as f64 - 2.0, r.h as f64 - 2.0);
}

fn draw_cell(ctx: &web::CanvasRenderingContext2d, rect: Rect, cell: &Cell, playing: bool) {
    let color = role_css(cell.role);
    ctx.set_global_alpha(cell_alpha(cell, playing));
    ctx.set_fill_style_str(&color);
    ctx.set_stroke_style_str(&color);

    let c = rect.center();
    let (cx, cy) = (c.x as f64, c.y as f64);
    let grow = 1.0 + PULSE_GROW * cell.pulse;
    let half = (rect.w * (0.5 - GLYPH_INSET) * grow) as f64;
    let s = cell.state_norm() as f64;

    match cell.glyph {
        GlyphType::Circle => {
            // ring that thickens with state until it becomes a disc
            let radius = half * (0.55 + 0.45 * s);
            ctx.begin_path();
            _ = ctx.arc(cx, cy, radius, 0.0, TAU);
            if cell.state + 1 == cell.glyph.state_count() {
                ctx.fill();
            } else {
                ctx.set_line_width((half * 0.12 * (1.0 + 2.0 * s)).max(1.0));
                ctx.stroke();
            }
        }
        GlyphType::Bar => {
            // bar rotated by 45 degrees per state
            ctx.save();
            _ = ctx.translate(cx, cy);
            _ = ctx.rotate(FRAC_PI_4 * cell.state as f64);
            let thickness = half * 0.35;
            ctx.fill_rect(-half, -thickness * 0.5, half * 2.0, thickness);
            ctx.restore();
        }
        GlyphType::Block => {
            let side = half * (1.2 + 0.8 * s);
            ctx.fill_rect(cx - side * 0.5, cy - side * 0.5, side, side);
        }
        GlyphType::Diagonal => {
            ctx.set_line_width((half * 0.22).max(1.0));
            ctx.begin_path();
            if cell.state == 0 {
                ctx.move_to(cx - half, cy - half);
                ctx.line_to(cx + half, cy + half);
            } else {
                ctx.move_to(cx + half, cy - half);
                ctx.line_to(cx - half, cy + half);
            }
            ctx.stroke();
        }
    }
}
