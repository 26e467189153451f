use crate::foundation::core::Rgb8;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**. Every frame the engine produces has an opaque background,
/// so in practice the bytes are also valid straight-alpha RGBA.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// A square frame filled with one opaque color.
    pub fn solid(side: u32, color: Rgb8) -> Self {
        let px = [color.r, color.g, color.b, 255];
        let len = side as usize * side as usize;
        let mut data = Vec::with_capacity(len * 4);
        for _ in 0..len {
            data.extend_from_slice(&px);
        }
        Self {
            width: side,
            height: side,
            data,
            premultiplied: true,
        }
    }

    /// RGBA bytes of one pixel, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Whether every pixel equals `rgba`.
    pub fn is_uniform(&self, rgba: [u8; 4]) -> bool {
        self.data.chunks_exact(4).all(|px| px == rgba)
    }

    /// Number of pixels that differ from `rgba`.
    pub fn count_unlike(&self, rgba: [u8; 4]) -> usize {
        self.data.chunks_exact(4).filter(|px| *px != rgba).count()
    }
}
