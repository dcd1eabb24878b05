// Host-side tests for the scroll/loop controller.

use canvas_core::{ScrollController, ScrollSpeed, ScrollState};

#[test]
fn speeds_map_to_pixels_per_tick() {
    assert_eq!(ScrollSpeed::Slow.per_tick(), 1);
    assert_eq!(ScrollSpeed::Medium.per_tick(), 2);
    assert_eq!(ScrollSpeed::Fast.per_tick(), 4);
    assert_eq!(ScrollSpeed::default(), ScrollSpeed::Medium);
}

#[test]
fn wraps_exactly_at_the_canvas_length() {
    let mut scroll = ScrollController::new(2000, ScrollSpeed::Fast);
    for _ in 0..499 {
        assert!(!scroll.tick().wrapped);
    }
    assert_eq!(
        scroll.state(),
        ScrollState {
            offset: 1996,
            loop_index: 0
        }
    );
    let tick = scroll.tick();
    assert!(tick.wrapped);
    assert_eq!(tick.offset, 0);
    assert_eq!(tick.loop_index, 1);
}

#[test]
fn loop_index_counts_full_traversals_and_offset_stays_in_range() {
    let length = 2001_u32;
    let mut scroll = ScrollController::new(length, ScrollSpeed::Medium);
    let mut wraps = 0;
    for n in 1..=10_000_u32 {
        let tick = scroll.tick();
        let travelled = n * ScrollSpeed::Medium.per_tick();
        assert!(tick.offset < length);
        assert_eq!(tick.offset, travelled % length);
        assert_eq!(tick.loop_index, travelled / length);
        if tick.wrapped {
            wraps += 1;
        }
    }
    assert_eq!(wraps, scroll.loop_index());
}

#[test]
fn reset_returns_to_origin_with_new_length() {
    let mut scroll = ScrollController::new(2000, ScrollSpeed::Fast);
    for _ in 0..700 {
        scroll.tick();
    }
    assert_eq!(scroll.loop_index(), 1);
    scroll.reset(3000);
    assert_eq!(scroll.state(), ScrollState::default());
    assert_eq!(scroll.length(), 3000);
    scroll.set_speed(ScrollSpeed::Slow);
    assert_eq!(scroll.tick().offset, 1);
}
