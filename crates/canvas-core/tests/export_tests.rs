// Host-side tests for export assembly and PNG encoding.

use canvas_core::{
    export_file_name, ExportError, ExportImage, PixelRect, VirtualCanvas, BACKGROUND, FOREGROUND,
};

fn sample_canvas() -> VirtualCanvas {
    let mut canvas = VirtualCanvas::new(40, 2000);
    canvas.paint_rect(PixelRect {
        x0: 5,
        y0: 1990,
        x1: 30,
        y1: 2000,
    });
    canvas.paint_row(7);
    canvas
}

#[test]
fn export_is_a_full_length_copy() {
    let canvas = sample_canvas();
    let image = ExportImage::from_canvas(&canvas);
    assert_eq!((image.width(), image.height()), (40, 2000));
    assert_eq!(image.buffer(), canvas.buffer());
    assert_eq!(image.buffer().get(10, 1995), Some(FOREGROUND));
    assert_eq!(image.buffer().get(0, 7), Some(FOREGROUND));
    assert_eq!(image.buffer().get(0, 8), Some(BACKGROUND));
}

#[test]
fn export_does_not_alias_the_live_canvas() {
    let mut canvas = sample_canvas();
    let image = ExportImage::from_canvas(&canvas);
    canvas.clear();
    assert!(canvas.is_blank());
    assert_eq!(image.buffer().get(10, 1995), Some(FOREGROUND));
}

#[test]
fn cleared_canvas_exports_as_background() {
    let mut canvas = sample_canvas();
    canvas.clear();
    let image = ExportImage::from_canvas(&canvas);
    assert!(image.buffer().is_uniform(BACKGROUND));
}

#[test]
fn png_round_trip_preserves_pixels() {
    let image = ExportImage::from_canvas(&sample_canvas());
    let png = image.encode_png().expect("encode");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = ExportImage::decode_png(&png).expect("decode");
    assert_eq!(decoded, image);
}

#[test]
fn decoding_garbage_fails() {
    let err = ExportImage::decode_png(b"definitely not a png").unwrap_err();
    assert!(matches!(err, ExportError::Png(_)));
}

#[test]
fn file_name_carries_the_timestamp() {
    assert_eq!(
        export_file_name(1_700_000_000_123),
        "scroll-canvas-1700000000123.png"
    );
}
