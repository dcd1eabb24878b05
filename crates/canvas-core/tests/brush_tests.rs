// Host-side tests for point, segment and band stamping.

use canvas_core::{
    stamp_band, Brush, BrushSize, CoordinateMapper, Vec2, VirtualCanvas, BACKGROUND, FOREGROUND,
};

fn painted(canvas: &VirtualCanvas, x: u32, y: u32) -> bool {
    canvas.pixel(x, y) == Some(FOREGROUND)
}

fn count_painted(canvas: &VirtualCanvas) -> usize {
    canvas
        .buffer()
        .pixels()
        .iter()
        .filter(|p| **p == FOREGROUND)
        .count()
}

#[test]
fn footprint_is_eight_to_one() {
    let mapper = CoordinateMapper::new(5000);
    for size in BrushSize::ALL {
        let fp = Brush::new(size, mapper).footprint();
        assert_eq!(fp.x, size.width() as f32);
        assert_eq!(fp.y * 8.0, fp.x);
    }
    let medium = Brush::new(BrushSize::Medium, mapper).footprint();
    assert_eq!(medium, Vec2::new(205.0, 25.625));
}

#[test]
fn point_stamp_fills_a_hard_edged_rectangle() {
    let mapper = CoordinateMapper::new(5000);
    let brush = Brush::new(BrushSize::Medium, mapper);
    let mut canvas = VirtualCanvas::new(1200, 5000);
    brush.stamp_point(&mut canvas, Vec2::new(300.0, 500.0));

    // 205 columns (197..402) by 26 rows (487..513)
    assert_eq!(count_painted(&canvas), 205 * 26);
    assert!(painted(&canvas, 197, 500));
    assert!(painted(&canvas, 401, 500));
    assert!(!painted(&canvas, 196, 500));
    assert!(!painted(&canvas, 402, 500));
    assert!(painted(&canvas, 300, 487));
    assert!(painted(&canvas, 300, 512));
    assert!(!painted(&canvas, 300, 486));
    assert!(!painted(&canvas, 300, 513));
}

#[test]
fn point_stamp_leaves_everything_outside_untouched() {
    let mapper = CoordinateMapper::new(2000);
    let brush = Brush::new(BrushSize::Medium, mapper);
    let mut canvas = VirtualCanvas::new(600, 2000);
    brush.stamp_point(&mut canvas, Vec2::new(100.0, 500.0));

    let rect = brush.footprint_rect(Vec2::new(100.0, 500.0));
    assert_eq!(rect.width(), 205);
    for y in 0..canvas.length() {
        for x in 0..canvas.width() {
            let inside = rect.contains(x as i32, y as i32);
            let px = canvas.pixel(x, y);
            if inside {
                assert_eq!(px, Some(FOREGROUND), "({x},{y}) should be painted");
            } else {
                assert_eq!(px, Some(BACKGROUND), "({x},{y}) should be untouched");
            }
        }
    }
}

#[test]
fn horizontal_segment_has_no_gaps_for_any_brush() {
    let mapper = CoordinateMapper::new(2000);
    for size in BrushSize::ALL {
        let brush = Brush::new(size, mapper);
        let mut canvas = VirtualCanvas::new(200, 2000);
        brush.stamp_segment(&mut canvas, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        for x in 0..100 {
            assert!(painted(&canvas, x, 0), "{size:?}: gap at x={x}");
        }
    }
}

#[test]
fn steep_segment_covers_every_row() {
    let mapper = CoordinateMapper::new(2000);
    let brush = Brush::new(BrushSize::Small, mapper);
    let mut canvas = VirtualCanvas::new(300, 2000);
    brush.stamp_segment(&mut canvas, Vec2::new(50.0, 100.0), Vec2::new(150.0, 400.0));
    for y in 100..=400 {
        let row_has_paint = (0..300).any(|x| painted(&canvas, x, y));
        assert!(row_has_paint, "row {y} left empty");
    }
}

#[test]
fn segment_step_count_scales_with_distance() {
    let mapper = CoordinateMapper::new(2000);
    let small = Brush::new(BrushSize::Small, mapper);
    let large = Brush::new(BrushSize::Large, mapper);
    assert_eq!(small.segment_steps(0.0), 1);
    assert_eq!(small.segment_steps(10.0), 10); // spacing floors at one pixel
    assert_eq!(large.segment_steps(100.0), 4); // spacing 25
    assert_eq!(large.segment_steps(101.0), 5);
}

#[test]
fn segment_across_the_seam_does_not_span_the_canvas() {
    let mapper = CoordinateMapper::new(2000);
    let brush = Brush::new(BrushSize::Small, mapper);
    let mut canvas = VirtualCanvas::new(200, 2000);
    brush.stamp_segment(&mut canvas, Vec2::new(100.0, 1990.0), Vec2::new(100.0, 10.0));
    assert!(painted(&canvas, 100, 1995));
    assert!(painted(&canvas, 100, 1999));
    assert!(painted(&canvas, 100, 0));
    assert!(painted(&canvas, 100, 5));
    assert!(!painted(&canvas, 100, 1000));
    assert!(!painted(&canvas, 100, 1980));
    assert!(!painted(&canvas, 100, 20));
}

#[test]
fn band_spans_full_width_with_margin() {
    let mapper = CoordinateMapper::new(2000);
    let mut canvas = VirtualCanvas::new(300, 2000);
    stamp_band(&mut canvas, &mapper, 500.0, 520.0);
    assert!(painted(&canvas, 0, 498));
    assert!(painted(&canvas, 299, 521));
    assert!(!painted(&canvas, 150, 497));
    assert!(!painted(&canvas, 150, 522));

    let mut reversed = VirtualCanvas::new(300, 2000);
    stamp_band(&mut reversed, &mapper, 520.0, 500.0);
    assert_eq!(canvas, reversed);
}

#[test]
fn single_row_band_is_four_rows_thick() {
    let mapper = CoordinateMapper::new(2000);
    let mut canvas = VirtualCanvas::new(10, 2000);
    stamp_band(&mut canvas, &mapper, 100.0, 100.0);
    let rows: Vec<u32> = (0..2000).filter(|y| painted(&canvas, 0, *y)).collect();
    assert_eq!(rows, vec![98, 99, 100, 101]);
}

#[test]
fn band_across_the_seam_wraps_row_by_row() {
    let mapper = CoordinateMapper::new(2000);
    let mut canvas = VirtualCanvas::new(10, 2000);
    stamp_band(&mut canvas, &mapper, 1999.0, 1.0);
    let rows: Vec<u32> = (0..2000).filter(|y| painted(&canvas, 0, *y)).collect();
    assert_eq!(rows, vec![0, 1, 2, 1997, 1998, 1999]);
}

#[test]
fn stamps_near_the_edges_clip_instead_of_wrapping() {
    let mapper = CoordinateMapper::new(2000);
    let brush = Brush::new(BrushSize::Large, mapper);
    let mut canvas = VirtualCanvas::new(300, 2000);
    brush.stamp_point(&mut canvas, Vec2::new(150.0, 1999.0));
    assert!(painted(&canvas, 150, 1999));
    assert!(painted(&canvas, 0, 1990));
    assert!(!painted(&canvas, 150, 0));
    assert!(!painted(&canvas, 150, 10));
}
