use super::*;
use crate::foundation::core::Rgb8;

#[test]
fn default_output_appends_png() {
    assert_eq!(
        default_output_path(Path::new("runs/colors.csv")),
        PathBuf::from("runs/colors.csv.png")
    );
    assert_eq!(
        default_output_path(Path::new("capture")),
        PathBuf::from("capture.png")
    );
}

#[test]
fn writes_readable_png() {
    let out = PathBuf::from("target")
        .join("unit_png")
        .join("nested")
        .join("out.png");
    let _ = std::fs::remove_file(&out);

    let mut canvas = Canvas::new(3, 2, Rgb8::BLACK);
    canvas.put(1, 1, Rgb8::new(9, 8, 7));
    write_png(canvas, &out).unwrap();

    let back = image::open(&out).unwrap().to_rgb8();
    assert_eq!(back.dimensions(), (3, 2));
    assert_eq!(back.get_pixel(1, 1).0, [9, 8, 7]);
    assert_eq!(back.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn empty_canvas_is_an_encode_error() {
    let out = PathBuf::from("target").join("unit_png").join("empty.png");
    let err = write_png(Canvas::new(240, 0, Rgb8::BLACK), &out).unwrap_err();
    assert!(matches!(err, LedTraceError::Encode(_)));
    assert!(!out.exists());
}
