use super::*;
use crate::foundation::core::TimeMs;

const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

fn dot_renderer() -> AmbientRenderer {
    AmbientRenderer::new(&GardenConfig::default()).unwrap()
}

fn field_renderer() -> AmbientRenderer {
    AmbientRenderer::new(&GardenConfig::with_style(RenderStyle::DistanceField)).unwrap()
}

fn at(ms: u64) -> FrameTime {
    FrameTime::at(TimeMs(ms))
}

fn viewport() -> Canvas {
    Canvas::square(512)
}

#[test]
fn cycle_start_shows_an_invisible_dot() {
    let frame = dot_renderer().render(at(60_000), viewport());
    assert_eq!((frame.width, frame.height), (512, 512));
    assert!(frame.is_uniform(BLACK));
}

#[test]
fn dot_is_fully_visible_at_end_of_appear() {
    let r = dot_renderer();
    let frame = r.render(at(60_600), viewport());
    assert_eq!(frame.pixel(264, 264), Some(WHITE));
    let half = r.render(at(60_300), viewport());
    let px = half.pixel(264, 264).unwrap();
    assert!(px[0] > 100 && px[0] < 160, "{px:?}");
}

#[test]
fn expand_draws_rings_around_an_empty_center() {
    let frame = dot_renderer().render(at(3_000), viewport());
    assert_eq!(frame.pixel(264, 264), Some(BLACK));
    let ring = frame.pixel(392, 264).unwrap();
    assert!(ring[0] > 150, "{ring:?}");
}

#[test]
fn late_expand_is_too_faint_to_draw() {
    let frame = dot_renderer().render(at(5_900), viewport());
    assert!(frame.is_uniform(BLACK));
}

#[test]
fn rendering_is_deterministic() {
    for r in [dot_renderer(), field_renderer()] {
        for ms in [0, 450, 1_234, 4_321, 9_999] {
            assert_eq!(r.render(at(ms), viewport()), r.render(at(ms), viewport()));
        }
    }
}

#[test]
fn zero_viewport_falls_back_to_black() {
    let r = dot_renderer();
    let frame = r.render(at(700), Canvas { width: 0, height: 0 });
    assert_eq!((frame.width, frame.height), (512, 512));
    assert!(frame.is_uniform(BLACK));
    assert!(r.try_render(at(700), Canvas { width: 0, height: 10 }).is_err());
}

#[test]
fn background_follows_time_of_day() {
    assert_eq!(background_for_hour(6), Rgb8::WHITE);
    assert_eq!(background_for_hour(17), Rgb8::WHITE);
    assert_eq!(background_for_hour(18), Rgb8::new(255, 191, 0));
    assert_eq!(background_for_hour(19), Rgb8::new(255, 191, 0));
    assert_eq!(background_for_hour(20), Rgb8::new(0, 0, 128));
    assert_eq!(background_for_hour(5), Rgb8::new(0, 0, 128));

    let r = field_renderer();
    for (hour, bg) in [(12, WHITE), (19, [255, 191, 0, 255]), (23, [0, 0, 128, 255])] {
        let frame = r.render(at(5_000).with_hour(hour), viewport());
        assert_eq!(frame.pixel(0, 0), Some(bg), "hour {hour}");
    }
}

#[test]
fn center_stone_fades_in_then_stays() {
    let r = field_renderer();
    let start = r.render(at(20_000), viewport());
    assert_eq!(start.pixel(264, 264), Some(WHITE));
    let later = r.render(at(25_000), viewport());
    assert_eq!(later.pixel(264, 264), Some([70, 70, 70, 255]));
}

#[test]
fn distance_field_shades_cells_near_the_ripple() {
    let frame = field_renderer().render(at(5_000), viewport());
    assert!(frame.count_unlike(WHITE) > 0);
    // Far corner is outside any ripple and any stone.
    assert_eq!(frame.pixel(1, 1), Some(WHITE));
}

#[test]
fn layout_is_stable_within_a_cycle() {
    let r = field_renderer();
    assert_eq!(r.layout(at(10_001)), r.layout(at(19_999)));
    assert_eq!(r.layout(at(10_001)).cycle, 1);
    assert_eq!(r.layout(at(20_000)).cycle, 2);
}

#[test]
fn dot_style_has_no_stones() {
    assert!(dot_renderer().layout(at(1)).stones.is_empty());
}

#[test]
fn reseeded_droplet_moves_between_cycles() {
    let mut cfg = GardenConfig::default();
    cfg.ambient.droplet = crate::config::DropletPlacement::Reseeded;
    let r = AmbientRenderer::new(&cfg).unwrap();
    let center_px = |d: GridPoint| (d.x * 16 + 8, d.y * 16 + 8);

    // 720 ms into a 6 s cycle is the Hold segment: the droplet is fully drawn.
    let first = r.layout(at(720)).droplet;
    let (later_ms, second) = (1..64u64)
        .map(|cycle| cycle * 6_000 + 720)
        .map(|ms| (ms, r.layout(at(ms)).droplet))
        .find(|(_, d)| first.x.abs_diff(d.x).max(first.y.abs_diff(d.y)) >= 3)
        .unwrap();

    let a = r.render(at(720), viewport());
    let b = r.render(at(later_ms), viewport());
    let (fx, fy) = center_px(first);
    let (sx, sy) = center_px(second);
    assert_eq!(a.pixel(fx, fy), Some(WHITE));
    assert_eq!(a.pixel(sx, sy), Some(BLACK));
    assert_eq!(b.pixel(sx, sy), Some(WHITE));
    assert_eq!(b.pixel(fx, fy), Some(BLACK));
}
