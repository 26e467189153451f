use super::*;
use crate::foundation::core::Rgb8;

#[test]
fn in_memory_sink_captures_frames_in_order() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        width: 4,
        height: 4,
        interval_ms: 100,
    };
    sink.begin(cfg).unwrap();
    let frame = FrameRGBA::solid(4, Rgb8::BLACK);
    sink.push_frame(0, TimeMs(0), &frame).unwrap();
    sink.push_frame(1, TimeMs(100), &frame).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg));
    assert!(sink.is_finished());
    let times: Vec<u64> = sink.frames().iter().map(|(t, _)| t.0).collect();
    assert_eq!(times, vec![0, 100]);
}

#[test]
fn png_sequence_sink_writes_numbered_files() {
    let dir = PathBuf::from("target").join("png_sequence_sink_test");
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = PngSequenceSink::new(&dir, "garden");
    sink.begin(SinkConfig {
        width: 8,
        height: 8,
        interval_ms: 100,
    })
    .unwrap();
    let frame = FrameRGBA::solid(8, Rgb8::new(0, 0, 128));
    sink.push_frame(3, TimeMs(300), &frame).unwrap();
    sink.end().unwrap();

    let path = dir.join("garden_000003.png");
    assert_eq!(sink.written(), &[path.clone()]);
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (8, 8));
    assert_eq!(img.get_pixel(4, 4).0, [0, 0, 128, 255]);
}

#[test]
fn png_write_reports_bad_paths() {
    let frame = FrameRGBA::solid(2, Rgb8::BLACK);
    let err = write_png(Path::new("target/does/not/exist/x.png"), &frame).unwrap_err();
    assert!(err.to_string().contains("sink error:"));
}
