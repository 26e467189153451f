use vello_cpu::kurbo::Shape;

use crate::foundation::core::{Point, Rect, Rgb8, Rgba8};
use crate::foundation::error::{GardenError, GardenResult};
use crate::render::frame::FrameRGBA;

const PATH_TOLERANCE: f64 = 0.1;

/// Square raster target backed by `vello_cpu`.
///
/// Draw calls composite source-over in call order. Paints with zero alpha are skipped.
pub(crate) struct Painter {
    ctx: vello_cpu::RenderContext,
    side: u16,
}

impl Painter {
    pub(crate) fn new(side: u32) -> GardenResult<Self> {
        let side_u16: u16 = side
            .try_into()
            .map_err(|_| GardenError::render("frame side exceeds u16"))?;
        if side_u16 == 0 {
            return Err(GardenError::render("frame side must be > 0"));
        }
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(side_u16, side_u16),
            side: side_u16,
        })
    }

    /// Length of the frame diagonal. No point of the frame is farther than this from any other.
    pub(crate) fn diagonal(&self) -> f64 {
        f64::from(self.side) * std::f64::consts::SQRT_2
    }

    pub(crate) fn fill_background(&mut self, color: Rgb8) {
        let side = f64::from(self.side);
        self.fill_rect(Rect::new(0.0, 0.0, side, side), color.opaque());
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        if !self.set_paint(color) {
            return;
        }
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    pub(crate) fn fill_rounded_rect(&mut self, rect: Rect, corner_radius: f64, color: Rgba8) {
        if !self.set_paint(color) {
            return;
        }
        let shape = vello_cpu::kurbo::RoundedRect::from_rect(rect_to_cpu(rect), corner_radius);
        self.ctx.fill_path(&shape.to_path(PATH_TOLERANCE));
    }

    pub(crate) fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        if radius <= 0.0 || !self.set_paint(color) {
            return;
        }
        let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius);
        self.ctx.fill_path(&circle.to_path(PATH_TOLERANCE));
    }

    pub(crate) fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgba8) {
        if radius <= 0.0 || width <= 0.0 || !self.set_paint(color) {
            return;
        }
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius);
        self.ctx.stroke_path(&circle.to_path(PATH_TOLERANCE));
    }

    pub(crate) fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.side, self.side);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        let side = u32::from(self.side);
        FrameRGBA {
            width: side,
            height: side,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn set_paint(&mut self, color: Rgba8) -> bool {
        if color.is_transparent() {
            return false;
        }
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        true
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
