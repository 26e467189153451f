//! Circle motifs shared by the ambient and touch renderers.

use crate::foundation::core::{Grid, GridPoint, Rgb8};
use crate::render::painter::Painter;

/// One stroked ring of a ripple, relative to the ripple's current radius.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Ring {
    pub(crate) scale: f64,
    pub(crate) width: f64,
    pub(crate) alpha: f64,
    pub(crate) color: Rgb8,
    /// Drawn only while the ripple radius exceeds this many cells.
    pub(crate) min_radius: f64,
}

pub(crate) const AMBIENT_RINGS: [Ring; 3] = [
    Ring {
        scale: 1.0,
        width: 4.0,
        alpha: 1.0,
        color: Rgb8::WHITE,
        min_radius: 0.0,
    },
    Ring {
        scale: 0.7,
        width: 3.0,
        alpha: 180.0 / 255.0,
        color: Rgb8::WHITE,
        min_radius: 2.0,
    },
    Ring {
        scale: 0.4,
        width: 2.0,
        alpha: 120.0 / 255.0,
        color: Rgb8::WHITE,
        min_radius: 1.0,
    },
];

pub(crate) const TOUCH_RINGS: [Ring; 3] = [
    Ring {
        scale: 1.0,
        width: 8.0,
        alpha: 1.0,
        color: Rgb8::new(200, 220, 255),
        min_radius: 0.0,
    },
    Ring {
        scale: 0.75,
        width: 5.0,
        alpha: 220.0 / 255.0,
        color: Rgb8::WHITE,
        min_radius: 2.0,
    },
    Ring {
        scale: 0.5,
        width: 3.0,
        alpha: 180.0 / 255.0,
        color: Rgb8::new(255, 250, 240),
        min_radius: 1.0,
    },
];

const DOT_RADIUS_CELLS: f64 = 1.2;
const DOT_OUTLINE_GAP_PX: f64 = 2.0;
const DOT_OUTLINE_WIDTH_PX: f64 = 2.0;
const DOT_OUTLINE_ALPHA: f64 = 0.8;

const CENTER_RADIUS_CELLS: f64 = 0.4;
const CENTER_ALPHA: f64 = 200.0 / 255.0;
const HIGHLIGHT_RADIUS_CELLS: f64 = 0.2;
const HIGHLIGHT_ALPHA: f64 = 0.8;
const HIGHLIGHT_COLOR: Rgb8 = Rgb8::new(180, 200, 255);

/// Droplet: a filled white disc with a thin outline just outside it.
pub(crate) fn draw_dot(p: &mut Painter, grid: Grid, cell: GridPoint, alpha: f64) {
    if alpha <= 0.0 {
        return;
    }
    let center = grid.cell_center(cell);
    let radius = grid.to_px(DOT_RADIUS_CELLS);
    p.fill_circle(center, radius, Rgb8::WHITE.with_alpha(alpha));
    p.stroke_circle(
        center,
        radius + DOT_OUTLINE_GAP_PX,
        DOT_OUTLINE_WIDTH_PX,
        Rgb8::WHITE.with_alpha(alpha * DOT_OUTLINE_ALPHA),
    );
}

/// Concentric rings around `cell`. `radius` is in cells.
pub(crate) fn draw_rings(
    p: &mut Painter,
    grid: Grid,
    cell: GridPoint,
    radius: f64,
    alpha: f64,
    rings: &[Ring],
) {
    if radius <= 0.0 || alpha <= 0.0 {
        return;
    }
    let center = grid.cell_center(cell);
    let radius_px = grid.to_px(radius);
    let diagonal = p.diagonal();
    for ring in rings {
        let ring_radius = radius_px * ring.scale;
        // A ring whose inner edge clears the diagonal cannot touch the frame.
        if radius <= ring.min_radius || ring_radius - ring.width / 2.0 > diagonal {
            continue;
        }
        p.stroke_circle(
            center,
            ring_radius,
            ring.width,
            ring.color.with_alpha(alpha * ring.alpha),
        );
    }
}

/// Filled disc plus tinted highlight marking a touch point.
pub(crate) fn draw_touch_center(p: &mut Painter, grid: Grid, cell: GridPoint, alpha: f64) {
    if alpha <= 0.0 {
        return;
    }
    let center = grid.cell_center(cell);
    let base = alpha * CENTER_ALPHA;
    p.fill_circle(
        center,
        grid.to_px(CENTER_RADIUS_CELLS),
        Rgb8::WHITE.with_alpha(base),
    );
    p.fill_circle(
        center,
        grid.to_px(HIGHLIGHT_RADIUS_CELLS),
        HIGHLIGHT_COLOR.with_alpha(base * HIGHLIGHT_ALPHA),
    );
}
