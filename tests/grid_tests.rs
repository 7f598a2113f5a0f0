// Host-side tests for grid geometry and pointer hit testing.

use glam::Vec2;
use ripple_lab::core::GridGeometry;

#[test]
fn cells_tile_without_gaps_or_overlaps() {
    let g = GridGeometry::new(1280.0, 720.0, 12, 9, 0.08, 0.08);
    let size = g.cell_size();
    assert!(size > 0.0);
    for row in 0..9 {
        for col in 0..12 {
            let r = g.cell_rect(col, row);
            assert_eq!(r.w, size);
            assert_eq!(r.h, size);
            if col + 1 < 12 {
                let next = g.cell_rect(col + 1, row);
                assert!((next.x - (r.x + r.w)).abs() < 1e-3, "gap at ({col},{row})");
            }
            if row + 1 < 9 {
                let below = g.cell_rect(col, row + 1);
                assert!((below.y - (r.y + r.h)).abs() < 1e-3, "gap at ({col},{row})");
            }
        }
    }
}

#[test]
fn block_is_centered_inside_margins() {
    let (w, h) = (1000.0, 600.0);
    let g = GridGeometry::new(w, h, 8, 6, 0.1, 0.1);
    let first = g.cell_rect(0, 0);
    let last = g.cell_rect(7, 5);
    let left = first.x;
    let right = w - (last.x + last.w);
    let top = first.y;
    let bottom = h - (last.y + last.h);
    assert!((left - right).abs() < 1e-3);
    assert!((top - bottom).abs() < 1e-3);
    assert!(left >= w * 0.1 - 1e-3);
    assert!(top >= h * 0.1 - 1e-3);
}

#[test]
fn cell_at_inverts_cell_rect() {
    let g = GridGeometry::new(800.0, 800.0, 5, 4, 0.05, 0.05);
    for row in 0..4 {
        for col in 0..5 {
            let center = g.cell_rect(col, row).center();
            assert_eq!(g.cell_at(center), Some((col, row)));
        }
    }
    assert_eq!(g.cell_at(Vec2::new(1.0, 1.0)), None);
    assert_eq!(g.cell_at(Vec2::new(-5.0, 400.0)), None);
    assert_eq!(g.cell_at(Vec2::new(799.0, 799.0)), None);
}

#[test]
fn zero_sized_inputs_do_not_panic() {
    let g = GridGeometry::new(0.0, 0.0, 4, 4, 0.1, 0.1);
    assert_eq!(g.cell_size(), 0.0);
    assert_eq!(g.cell_at(Vec2::ZERO), None);

    let empty = GridGeometry::new(640.0, 480.0, 0, 3, 0.1, 0.1);
    assert_eq!(empty.cell_size(), 0.0);
}
