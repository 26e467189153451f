use std::sync::{Arc, Mutex};

use super::*;
use crate::clock::ManualClock;
use crate::encode::sink::InMemorySink;

const BLACK: [u8; 4] = [0, 0, 0, 255];

fn garden() -> ZenGarden {
    ZenGarden::new(GardenConfig::default()).unwrap()
}

fn view() -> Canvas {
    Canvas::square(512)
}

fn at(ms: u64) -> FrameTime {
    FrameTime::at(TimeMs(ms))
}

#[test]
fn starts_in_ambient_mode() {
    let mut g = garden();
    assert_eq!(g.mode(), GardenMode::Ambient);
    let tick = g.on_tick(at(700), view());
    assert_eq!(tick.mode, GardenMode::Ambient);
    assert!(!tick.mode_changed);
    assert_eq!(tick.frame, g.ambient().render(at(700), view()));
}

#[test]
fn touch_switches_to_interactive() {
    let mut g = garden();
    let mode = g
        .on_touch_down(256.0, 256.0, view(), TimeMs(1_000))
        .unwrap();
    assert_eq!(mode, GardenMode::Interactive);
    assert_eq!(g.tracker().len(), 1);
    assert_eq!(g.tracker().ripples()[0].x, 0.5);

    let tick = g.on_tick(at(1_500), view());
    assert_eq!(tick.mode, GardenMode::Interactive);
    assert!(!tick.mode_changed);
    assert!(tick.frame.count_unlike(BLACK) > 0);
}

#[test]
fn returns_to_ambient_after_last_ripple_expires() {
    let mut g = garden();
    g.on_touch_down(100.0, 400.0, view(), TimeMs(1_000))
        .unwrap();

    // Age equal to the lifetime is still live.
    let tick = g.on_tick(at(4_000), view());
    assert_eq!(tick.mode, GardenMode::Interactive);
    assert_eq!(g.tracker().len(), 1);

    let tick = g.on_tick(at(4_001), view());
    assert_eq!(tick.mode, GardenMode::Ambient);
    assert!(tick.mode_changed);
    assert!(g.tracker().is_empty());
    assert_eq!(tick.frame, g.ambient().render(at(4_001), view()));
}

#[test]
fn touches_beyond_capacity_evict_oldest() {
    let mut g = garden();
    for i in 0..7u64 {
        g.on_touch_down(10.0 * i as f64, 0.0, view(), TimeMs(100 * i))
            .unwrap();
    }
    let starts: Vec<u64> = g.tracker().ripples().iter().map(|r| r.start.0).collect();
    assert_eq!(starts, vec![200, 300, 400, 500, 600]);
}

#[test]
fn touch_on_empty_view_is_rejected() {
    let mut g = garden();
    let err = g
        .on_touch_down(1.0, 1.0, Canvas { width: 0, height: 10 }, TimeMs(0))
        .unwrap_err();
    assert!(err.to_string().starts_with("viewport error:"));
    assert_eq!(g.mode(), GardenMode::Ambient);
    assert!(g.tracker().is_empty());
}

#[test]
fn touch_outside_view_is_clamped() {
    let mut g = garden();
    g.on_touch_down(-40.0, 900.0, view(), TimeMs(0)).unwrap();
    let r = g.tracker().ripples()[0];
    assert_eq!((r.x, r.y), (0.0, 1.0));
}

#[test]
fn reset_drops_ripples() {
    let mut g = garden();
    g.on_touch_down(5.0, 5.0, view(), TimeMs(0)).unwrap();
    g.reset_to_auto_mode();
    assert_eq!(g.mode(), GardenMode::Ambient);
    assert!(g.tracker().is_empty());
    assert!(!g.on_tick(at(10), view()).mode_changed);
}

#[test]
fn tick_samples_the_clock() {
    let mut g = garden();
    let clock = ManualClock::new(TimeMs(1_200), 9);
    let a = g.tick(&clock, view());
    assert_eq!(a.frame, g.ambient().render(at(1_200), view()));
    clock.advance(3_000);
    let b = g.tick(&clock, view());
    assert_eq!(b.frame, g.ambient().render(at(4_200), view()));
}

#[test]
fn render_sequence_feeds_sink_in_order() {
    let mut g = garden();
    g.on_touch_down(256.0, 256.0, view(), TimeMs(0)).unwrap();
    let mut sink = InMemorySink::new();
    g.render_sequence(at(2_900), 100, 4, view(), &mut sink)
        .unwrap();

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.interval_ms), (512, 512, 100));
    assert!(sink.is_finished());
    let times: Vec<u64> = sink.frames().iter().map(|(t, _)| t.0).collect();
    assert_eq!(times, vec![2_900, 3_000, 3_100, 3_200]);
    // The ripple expired midway through the sequence.
    assert_eq!(g.mode(), GardenMode::Ambient);
}

#[test]
fn zero_viewport_tick_yields_fallback() {
    let mut g = garden();
    let tick = g.on_tick(at(1_000), Canvas { width: 0, height: 0 });
    assert_eq!(tick.frame.width, 512);
    assert!(tick.frame.is_uniform(BLACK));
}

#[test]
fn session_can_be_shared_behind_a_mutex() {
    let g = Arc::new(Mutex::new(garden()));
    let toucher = {
        let g = Arc::clone(&g);
        std::thread::spawn(move || {
            g.lock()
                .unwrap()
                .on_touch_down(128.0, 128.0, Canvas::square(512), TimeMs(500))
                .unwrap()
        })
    };
    assert_eq!(toucher.join().unwrap(), GardenMode::Interactive);
    let tick = g.lock().unwrap().on_tick(at(600), view());
    assert_eq!(tick.mode, GardenMode::Interactive);
}
