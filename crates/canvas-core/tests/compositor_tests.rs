// Host-side tests for the wraparound viewport blit.

use canvas_core::{
    compose, draw_cursor_preview, plan_blits, Blit, PixelRect, Surface, Vec2, VirtualCanvas,
    BACKGROUND, FOREGROUND,
};

fn row_painted(surface: &Surface, y: u32) -> bool {
    surface.row(y).iter().all(|p| *p == FOREGROUND)
}

#[test]
fn single_blit_when_the_window_fits() {
    let plan = plan_blits(100, 5000, 564);
    assert_eq!(
        plan.as_slice(),
        &[Blit {
            src_y: 100,
            dst_y: 0,
            rows: 564
        }]
    );
    // exactly enough rows left is still one blit
    assert_eq!(plan_blits(5000 - 564, 5000, 564).len(), 1);
}

#[test]
fn split_blit_when_the_window_straddles_the_seam() {
    let length = 5000;
    let plan = plan_blits(length - 10, length, 50);
    assert_eq!(
        plan.as_slice(),
        &[
            Blit {
                src_y: length - 10,
                dst_y: 0,
                rows: 10
            },
            Blit {
                src_y: 0,
                dst_y: 10,
                rows: 40
            },
        ]
    );
}

#[test]
fn split_compose_shows_tail_then_head() {
    let length = 2000;
    let mut canvas = VirtualCanvas::new(8, length);
    for y in [length - 5, 5, 1000] {
        canvas.paint_rect(PixelRect {
            x0: 0,
            y0: y as i32,
            x1: 8,
            y1: y as i32 + 1,
        });
    }
    let mut surface = Surface::new(8, 50, BACKGROUND);
    compose(&canvas, length - 10, &mut surface);

    let painted: Vec<u32> = (0..50).filter(|y| row_painted(&surface, *y)).collect();
    // virtual L-5 lands on row 5, virtual 5 lands on row 10 + 5
    assert_eq!(painted, vec![5, 15]);
}

#[test]
fn compose_is_idempotent() {
    let mut canvas = VirtualCanvas::new(64, 2000);
    canvas.paint_rect(PixelRect {
        x0: 3,
        y0: 1990,
        x1: 40,
        y1: 2000,
    });
    canvas.paint_rect(PixelRect {
        x0: 10,
        y0: 0,
        x1: 20,
        y1: 30,
    });
    let mut a = Surface::new(64, 48, BACKGROUND);
    let mut b = Surface::new(64, 48, FOREGROUND);
    compose(&canvas, 1985, &mut a);
    compose(&canvas, 1985, &mut b);
    assert_eq!(a.as_bytes(), b.as_bytes());
    compose(&canvas, 1985, &mut a);
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn wider_surface_keeps_background_beyond_the_canvas() {
    let mut canvas = VirtualCanvas::new(4, 2000);
    canvas.paint_rect(PixelRect {
        x0: 0,
        y0: 0,
        x1: 4,
        y1: 2000,
    });
    let mut surface = Surface::new(6, 3, BACKGROUND);
    compose(&canvas, 0, &mut surface);
    assert_eq!(surface.get(3, 1), Some(FOREGROUND));
    assert_eq!(surface.get(4, 1), Some(BACKGROUND));
    assert_eq!(surface.get(5, 2), Some(BACKGROUND));
}

#[test]
fn cursor_preview_draws_an_outline_only() {
    let mut surface = Surface::new(100, 40, BACKGROUND);
    draw_cursor_preview(&mut surface, Vec2::new(50.0, 20.0), Vec2::new(40.0, 5.0));
    // rect covers columns 30..70 and rows 17..22
    assert_ne!(surface.get(30, 18), Some(BACKGROUND));
    assert_ne!(surface.get(69, 21), Some(BACKGROUND));
    assert_ne!(surface.get(50, 17), Some(BACKGROUND));
    assert_eq!(surface.get(50, 18), Some(BACKGROUND));
    assert_eq!(surface.get(50, 20), Some(BACKGROUND));
    assert_eq!(surface.get(50, 22), Some(BACKGROUND));
    assert_eq!(surface.get(29, 20), Some(BACKGROUND));
    assert_eq!(surface.get(70, 20), Some(BACKGROUND));
}
