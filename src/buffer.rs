//! Off-screen ARGB32 pixel surface the ruler paints into.

use crate::theme::Color;
use crate::utils::PixelSnap;
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub struct OffscreenBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl OffscreenBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Raw bytes for hosts that upload the buffer as a texture.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Color::from_argb(self.pixels[(y * self.width + x) as usize]))
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_argb());
    }

    /// Fills the pixels whose centers fall inside the rectangle, clipped to
    /// the buffer.
    pub fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color) {
        if size.x <= 0.0 || size.y <= 0.0 || !origin.is_finite() {
            return;
        }
        let end = origin + size;
        let x0 = clip((origin.x - 0.5).ceil(), self.width);
        let x1 = clip((end.x - 0.5).ceil(), self.width);
        let y0 = clip((origin.y - 0.5).ceil(), self.height);
        let y1 = clip((end.y - 0.5).ceil(), self.height);
        for y in y0..y1 {
            let row = (y * self.width) as usize;
            for x in x0..x1 {
                let dst = &mut self.pixels[row + x as usize];
                *dst = blend(*dst, color);
            }
        }
    }

    /// Vertical line `line_width` pixels wide, starting at the column of `x`.
    pub fn vline(&mut self, x: f64, y0: f64, y1: f64, line_width: f64, color: Color) {
        let column = x.column();
        let columns = line_width.max(1.0).round() as i64;
        let left = column as f64;
        self.fill_rect(
            DVec2::new(left, y0.min(y1)),
            DVec2::new(columns as f64, (y1 - y0).abs()),
            color,
        );
    }
}

fn clip(v: f64, max: u32) -> u32 {
    if v.is_nan() || v <= 0.0 {
        0
    } else {
        v.min(max as f64) as u32
    }
}

/// Source-over compositing with straight alpha.
fn blend(dst: u32, src: Color) -> u32 {
    match src.a {
        255 => src.to_argb(),
        0 => dst,
        a => {
            let d = Color::from_argb(dst);
            let a = a as u32;
            let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a)) / 255) as u8;
            let out_a = (a + d.a as u32 * (255 - a) / 255) as u8;
            Color::rgba(mix(src.r, d.r), mix(src.g, d.g), mix(src.b, d.b), out_a).to_argb()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_clipped() {
        let mut buf = OffscreenBuffer::new(10, 4);
        let red = Color::rgb(255, 0, 0);
        buf.fill_rect(DVec2::new(-5.0, -5.0), DVec2::new(8.0, 100.0), red);
        assert_eq!(buf.pixel(2, 3), Some(red));
        assert_eq!(buf.pixel(3, 0), Some(Color::rgba(0, 0, 0, 0)));
        assert_eq!(buf.pixel(10, 0), None);
    }

    #[test]
    fn vline_covers_one_column() {
        let mut buf = OffscreenBuffer::new(10, 4);
        let white = Color::rgb(255, 255, 255);
        buf.vline(4.7, 0.0, 4.0, 1.0, white);
        assert_eq!(buf.pixel(4, 0), Some(white));
        assert_eq!(buf.pixel(4, 3), Some(white));
        assert_ne!(buf.pixel(5, 0), Some(white));
        assert_ne!(buf.pixel(3, 0), Some(white));
    }

    #[test]
    fn bytes_cover_every_pixel() {
        let buf = OffscreenBuffer::new(3, 2);
        assert_eq!(buf.as_bytes().len(), 3 * 2 * 4);
    }
}
