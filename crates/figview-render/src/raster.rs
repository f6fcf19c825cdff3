//! CPU wireframe rasterization used by the headless backend.

use glam::{Vec2, Vec3};

/// An RGBA8 pixel buffer with alpha blending.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Vec3) -> Self {
        let px = [to_u8(background.x), to_u8(background.y), to_u8(background.z), 255];
        let pixels = px
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Returns the RGBA bytes.
    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Returns the pixel at `(x, y)`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Blends `color` at `opacity` into pixel `(x, y)`. Out-of-range is ignored.
    pub fn blend(&mut self, x: i64, y: i64, color: Vec3, opacity: f32) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let a = opacity.clamp(0.0, 1.0);
        for (c, src) in [color.x, color.y, color.z].into_iter().enumerate() {
            let dst = f32::from(self.pixels[i + c]) / 255.0;
            self.pixels[i + c] = to_u8(src * a + dst * (1.0 - a));
        }
    }

    /// Fills a square of side `size` centered at `center`.
    pub fn square(&mut self, center: Vec2, size: f32, color: Vec3, opacity: f32) {
        #[allow(clippy::cast_possible_truncation)]
        let half = (size * 0.5).max(0.5).round() as i64;
        #[allow(clippy::cast_possible_truncation)]
        let (cx, cy) = (center.x.round() as i64, center.y.round() as i64);
        for y in (cy - half)..=(cy + half) {
            for x in (cx - half)..=(cx + half) {
                self.blend(x, y, color, opacity);
            }
        }
    }

    /// Draws a segment from `a` to `b` with the given pixel width.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: Vec3, opacity: f32) {
        let steps = (b - a).abs().max_element().ceil().max(1.0);
        let n = steps as u32;
        for i in 0..=n {
            let t = i as f32 / steps;
            let p = a.lerp(b, t);
            if width <= 1.0 {
                self.blend(p.x.round() as i64, p.y.round() as i64, color, opacity);
            } else {
                self.square(p, width, color, opacity);
            }
        }
    }

    /// Applies a 3x3 box blur to the color channels.
    pub fn box_blur(&mut self) {
        let (w, h) = (self.width as usize, self.height as usize);
        let src = self.pixels.clone();
        for y in 0..h {
            for x in 0..w {
                let mut sum = [0u32; 3];
                let mut count = 0u32;
                for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                    for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                        let j = (ny * w + nx) * 4;
                        for (c, s) in sum.iter_mut().enumerate() {
                            *s += u32::from(src[j + c]);
                        }
                        count += 1;
                    }
                }
                let i = (y * w + x) * 4;
                for (c, s) in sum.iter().enumerate() {
                    #[allow(clippy::cast_possible_truncation)]
                    let avg = (s / count) as u8;
                    self.pixels[i + c] = avg;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_fill() {
        let canvas = Canvas::new(3, 2, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(canvas.pixel(2, 1), [255, 0, 0, 255]);
        assert_eq!(canvas.into_pixels().len(), 3 * 2 * 4);
    }

    #[test]
    fn test_blend_clips_out_of_range() {
        let mut canvas = Canvas::new(2, 2, Vec3::ZERO);
        canvas.blend(-1, 0, Vec3::ONE, 1.0);
        canvas.blend(0, 5, Vec3::ONE, 1.0);
        assert!(canvas.into_pixels().chunks(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn test_half_opacity() {
        let mut canvas = Canvas::new(1, 1, Vec3::ZERO);
        canvas.blend(0, 0, Vec3::ONE, 0.5);
        assert_eq!(canvas.pixel(0, 0)[0], 128);
    }

    #[test]
    fn test_line_endpoints() {
        let mut canvas = Canvas::new(10, 10, Vec3::ZERO);
        canvas.line(Vec2::new(1.0, 1.0), Vec2::new(8.0, 5.0), 1.0, Vec3::X, 1.0);
        assert_eq!(canvas.pixel(1, 1), [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(8, 5), [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(8, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn test_box_blur_spreads() {
        let mut canvas = Canvas::new(3, 3, Vec3::ZERO);
        canvas.blend(1, 1, Vec3::ONE, 1.0);
        canvas.box_blur();
        assert_eq!(canvas.pixel(1, 1)[0], 255 / 9);
        assert_eq!(canvas.pixel(0, 0)[0], 255 / 4);
    }
}
