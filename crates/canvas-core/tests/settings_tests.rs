// Host-side tests for settings parsing and canvas length validation.

use canvas_core::{BrushSize, CanvasLength, ConfigError, ScrollSpeed, Settings};

#[test]
fn defaults() {
    let settings = Settings::default();
    assert_eq!(settings.brush_size, BrushSize::Medium);
    assert_eq!(settings.scroll_speed, ScrollSpeed::Medium);
    assert_eq!(settings.canvas_length.get(), 5000);
}

#[test]
fn brush_sizes_parse_by_name_or_width() {
    assert_eq!("small".parse::<BrushSize>(), Ok(BrushSize::Small));
    assert_eq!(" Large ".parse::<BrushSize>(), Ok(BrushSize::Large));
    assert_eq!("205".parse::<BrushSize>(), Ok(BrushSize::Medium));
    assert_eq!(
        "huge".parse::<BrushSize>(),
        Err(ConfigError::BrushSize("huge".into()))
    );
}

#[test]
fn scroll_speeds_parse_by_name_or_rate() {
    assert_eq!("slow".parse::<ScrollSpeed>(), Ok(ScrollSpeed::Slow));
    assert_eq!("FAST".parse::<ScrollSpeed>(), Ok(ScrollSpeed::Fast));
    assert_eq!("2".parse::<ScrollSpeed>(), Ok(ScrollSpeed::Medium));
    assert!("3".parse::<ScrollSpeed>().is_err());
}

#[test]
fn length_range_is_enforced() {
    assert_eq!(CanvasLength::new(1999), None);
    assert_eq!(CanvasLength::new(2000), Some(CanvasLength::MIN));
    assert_eq!(CanvasLength::new(10000), Some(CanvasLength::MAX));
    assert_eq!(CanvasLength::new(10001), None);
    assert_eq!(CanvasLength::clamped(-5), CanvasLength::MIN);
    assert_eq!(CanvasLength::clamped(1 << 40), CanvasLength::MAX);
}

#[test]
fn live_input_only_accepts_in_range_values() {
    assert_eq!(CanvasLength::accept_live("4500").map(|l| l.get()), Some(4500));
    assert_eq!(CanvasLength::accept_live("45"), None);
    assert_eq!(CanvasLength::accept_live("20000"), None);
    assert_eq!(CanvasLength::accept_live(""), None);
    assert_eq!(CanvasLength::accept_live("abc"), None);
}

#[test]
fn committed_input_is_clamped() {
    assert_eq!(CanvasLength::clamp_input("45"), CanvasLength::MIN);
    assert_eq!(CanvasLength::clamp_input("99999"), CanvasLength::MAX);
    assert_eq!(CanvasLength::clamp_input("abc"), CanvasLength::MIN);
    assert_eq!(CanvasLength::clamp_input("").get(), 2000);
    assert_eq!(CanvasLength::clamp_input("6200px").get(), 6200);
    assert_eq!(CanvasLength::clamp_input("-300"), CanvasLength::MIN);
}

#[test]
fn parsed_lengths_clamp_but_reject_non_numbers() {
    assert_eq!("7000".parse::<CanvasLength>().map(|l| l.get()), Ok(7000));
    assert_eq!("12".parse::<CanvasLength>(), Ok(CanvasLength::MIN));
    assert_eq!(
        "long".parse::<CanvasLength>(),
        Err(ConfigError::CanvasLength("long".into()))
    );
}

#[test]
fn nudging_steps_and_clamps() {
    let length = CanvasLength::default();
    assert_eq!(length.nudged(100).get(), 5100);
    assert_eq!(length.nudged(-100).get(), 4900);
    assert_eq!(CanvasLength::MAX.nudged(100), CanvasLength::MAX);
    assert_eq!(CanvasLength::MIN.nudged(-100), CanvasLength::MIN);
    assert_eq!(length.to_string(), "5000");
}
