// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: software stroke rasterizer

use super::Canvas;
use crate::error::{Error, Result};
use crate::geometry::Path;
use crate::types::{Bounds, Color, StrokeStyle, Vec2};
use image::RgbaImage;

/// Axis-aligned world to pixel mapping: `px = x * scale_x + offset_x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale_x: f32,
    pub scale_y: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::identity()
    }
}

impl Viewport {
    /// World coordinates are pixel coordinates.
    pub const fn identity() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Fit `bounds` centred into a `width` x `height` raster, keeping `margin`
    /// pixels free on every side. Equal aspect, world y axis pointing up.
    pub fn fit(bounds: Bounds, width: usize, height: usize, margin: f32) -> Self {
        let (w, h) = (width as f32, height as f32);
        let avail_w = (w - 2.0 * margin).max(1.0);
        let avail_h = (h - 2.0 * margin).max(1.0);
        let (bw, bh) = (bounds.width(), bounds.height());
        let scale = match (bw > 0.0, bh > 0.0) {
            (true, true) => (avail_w / bw).min(avail_h / bh),
            (true, false) => avail_w / bw,
            (false, true) => avail_h / bh,
            (false, false) => 1.0,
        };
        Self {
            scale_x: scale,
            scale_y: -scale,
            offset_x: (w - bw * scale) / 2.0 - bounds.min.x * scale,
            offset_y: h - (h - bh * scale) / 2.0 + bounds.min.y * scale,
        }
    }

    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: p.x * self.scale_x + self.offset_x,
            y: p.y * self.scale_y + self.offset_y,
        }
    }
}

/// Stroke a path with the given colour and width into the RGBA8888 buffer.
///
/// Each flattened segment is filled as one quad, so a segment never blends
/// twice over itself.
pub fn draw_stroke(
    path: &Path,
    width_px: f32,
    color: Color,
    buffer: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) {
    for seg in path.flatten() {
        let dx = seg.to.x - seg.from.x;
        let dy = seg.to.y - seg.from.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len == 0.0 {
            continue;
        }
        let nx = -dy / len * width_px * 0.5;
        let ny = dx / len * width_px * 0.5;
        let quad = [
            Vec2 {
                x: seg.from.x + nx,
                y: seg.from.y + ny,
            },
            Vec2 {
                x: seg.from.x - nx,
                y: seg.from.y - ny,
            },
            Vec2 {
                x: seg.to.x - nx,
                y: seg.to.y - ny,
            },
            Vec2 {
                x: seg.to.x + nx,
                y: seg.to.y + ny,
            },
        ];
        fill_convex(&quad, color, buffer, width, height, stride);
    }
}

fn fill_convex(
    poly: &[Vec2; 4],
    color: Color,
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) {
    let (mut lo, mut hi) = (poly[0], poly[0]);
    for p in &poly[1..] {
        lo.x = lo.x.min(p.x);
        lo.y = lo.y.min(p.y);
        hi.x = hi.x.max(p.x);
        hi.y = hi.y.max(p.y);
    }
    let min_x = lo.x.floor().max(0.0) as i32;
    let max_x = hi.x.ceil().min(width as f32) as i32;
    let min_y = lo.y.floor().max(0.0) as i32;
    let max_y = hi.y.ceil().min(height as f32) as i32;

    for y in min_y..max_y {
        for x in min_x..max_x {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            if inside_convex(px, py, poly) {
                blend_pixel(buf, stride, x as usize, y as usize, color);
            }
        }
    }
}

fn edge(px: f32, py: f32, a: Vec2, b: Vec2) -> f32 {
    (px - a.x) * (b.y - a.y) - (py - a.y) * (b.x - a.x)
}

fn inside_convex(px: f32, py: f32, poly: &[Vec2; 4]) -> bool {
    let mut pos = true;
    let mut neg = true;
    for i in 0..poly.len() {
        let e = edge(px, py, poly[i], poly[(i + 1) % poly.len()]);
        pos &= e >= 0.0;
        neg &= e <= 0.0;
    }
    pos || neg
}

fn blend_pixel(buf: &mut [u8], stride: usize, x: usize, y: usize, src: Color) {
    let offset = y * stride + x * 4;
    if offset + 3 >= buf.len() {
        return;
    }
    let sa = src.a as f32 / 255.0;
    let ia = 1.0 - sa;

    let out_a = sa + buf[offset + 3] as f32 / 255.0 * ia;
    let out_r = src.r as f32 * sa + buf[offset] as f32 * ia;
    let out_g = src.g as f32 * sa + buf[offset + 1] as f32 * ia;
    let out_b = src.b as f32 * sa + buf[offset + 2] as f32 * ia;

    buf[offset] = out_r.round().min(255.0) as u8;
    buf[offset + 1] = out_g.round().min(255.0) as u8;
    buf[offset + 2] = out_b.round().min(255.0) as u8;
    buf[offset + 3] = (out_a * 255.0).round().min(255.0) as u8;
}

/// Largest raster side, in pixels, that figures allocate for themselves.
pub const MAX_RASTER_SIDE: usize = 16_384;

/// Check that `buffer` can hold `height` rows of `stride` bytes.
pub fn check_buffer(buffer: &[u8], width: usize, height: usize, stride: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyRaster { width, height });
    }
    let row = width
        .checked_mul(4)
        .ok_or(Error::RasterTooLarge { width, height })?;
    let needed = (height - 1)
        .checked_mul(stride.max(row))
        .and_then(|n| n.checked_add(row))
        .ok_or(Error::RasterTooLarge { width, height })?;
    if stride < row || buffer.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            actual: buffer.len(),
        });
    }
    Ok(())
}

/// Copy an RGBA8888 buffer into an owned image, dropping row padding.
pub fn to_image(buffer: &[u8], width: usize, height: usize, stride: usize) -> Result<RgbaImage> {
    check_buffer(buffer, width, height, stride)?;
    // bounded by `buffer.len()` once the check passed
    let mut packed = Vec::with_capacity(width * height * 4);
    for row in buffer.chunks(stride).take(height) {
        packed.extend_from_slice(&row[..width * 4]);
    }
    RgbaImage::from_raw(width as u32, height as u32, packed).ok_or(Error::BufferTooSmall {
        needed: width * height * 4,
        actual: buffer.len(),
    })
}

/// [`Canvas`] over a caller-owned RGBA8888 buffer.
pub struct RasterCanvas<'a> {
    buffer: &'a mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    viewport: Viewport,
}

impl<'a> RasterCanvas<'a> {
    pub fn new(buffer: &'a mut [u8], width: usize, height: usize, stride: usize) -> Result<Self> {
        check_buffer(buffer, width, height, stride)?;
        Ok(Self {
            buffer,
            width,
            height,
            stride,
            viewport: Viewport::identity(),
        })
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        let px = [color.r, color.g, color.b, color.a];
        for row in self.buffer.chunks_mut(self.stride).take(self.height) {
            for dst in row[..self.width * 4].chunks_exact_mut(4) {
                dst.copy_from_slice(&px);
            }
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let o = y * self.stride + x * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.buffer[o..o + 4]);
        Some(px)
    }
}

impl Canvas for RasterCanvas<'_> {
    fn stroke_polyline(&mut self, points: &[Vec2], style: &StrokeStyle) {
        let viewport = self.viewport;
        let path = Path::from_points(points, |p| viewport.apply(p));
        draw_stroke(
            &path,
            style.width,
            style.color.with_opacity(style.opacity),
            self.buffer,
            self.width,
            self.height,
            self.stride,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    };

    #[test]
    fn stroke_simple_rect() {
        let mut path = Path::new();
        path.move_to(Vec2 { x: 1.0, y: 1.0 });
        path.line_to(Vec2 { x: 6.0, y: 1.0 });
        path.line_to(Vec2 { x: 6.0, y: 6.0 });
        path.line_to(Vec2 { x: 1.0, y: 6.0 });
        path.line_to(Vec2 { x: 1.0, y: 1.0 });

        let mut buf = vec![0u8; 8 * 8 * 4];
        draw_stroke(&path, 1.0, RED, &mut buf, 8, 8, 8 * 4);
        let off = 1 * 8 * 4 + 1 * 4;
        assert_eq!(&buf[off..off + 4], &[255, 0, 0, 255]);
        // interior untouched
        let inside = 3 * 8 * 4 + 3 * 4;
        assert_eq!(&buf[inside..inside + 4], &[0, 0, 0, 0]);
    }

    #[test]
    fn half_opacity_blends_over_white() {
        let mut buf = vec![255u8; 8 * 8 * 4];
        let mut canvas = RasterCanvas::new(&mut buf, 8, 8, 32).unwrap();
        let style = StrokeStyle::new(Color::BLACK, 2.0).with_opacity(0.5);
        canvas.stroke_polyline(&[Vec2::new(1.0, 4.0), Vec2::new(7.0, 4.0)], &style);
        // alpha 128 of black over white
        assert_eq!(canvas.pixel(3, 4), Some([127, 127, 127, 255]));
        assert_eq!(canvas.pixel(3, 1), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(8, 0), None);
    }

    #[test]
    fn fit_flips_y_and_centres() {
        let bounds = Bounds {
            min: Vec2::new(0.0, 0.0),
            max: Vec2::new(2.0, 1.0),
        };
        let vp = Viewport::fit(bounds, 120, 100, 10.0);
        // width limited: 100 px for 2 units
        assert_eq!(vp.scale_x, 50.0);
        assert_eq!(vp.apply(Vec2::new(0.0, 0.0)), Vec2::new(10.0, 75.0));
        assert_eq!(vp.apply(Vec2::new(2.0, 1.0)), Vec2::new(110.0, 25.0));
    }

    #[test]
    fn fit_degenerate_bounds() {
        let line = Bounds {
            min: Vec2::new(0.0, 0.0),
            max: Vec2::new(4.0, 0.0),
        };
        let vp = Viewport::fit(line, 100, 100, 0.0);
        assert_eq!(vp.scale_x, 25.0);
        assert_eq!(vp.apply(Vec2::new(0.0, 0.0)).y, 50.0);
    }

    #[test]
    fn buffer_checks() {
        let mut small = vec![0u8; 10];
        assert!(matches!(
            RasterCanvas::new(&mut small, 4, 4, 16),
            Err(Error::BufferTooSmall { .. })
        ));
        assert!(matches!(
            RasterCanvas::new(&mut small, 0, 4, 16),
            Err(Error::EmptyRaster { .. })
        ));
        assert!(matches!(
            check_buffer(&small, usize::MAX / 2, 4, 16),
            Err(Error::RasterTooLarge { .. })
        ));
        assert!(matches!(
            check_buffer(&small, 1, usize::MAX / 2, 1 << 20),
            Err(Error::RasterTooLarge { .. })
        ));
    }

    #[test]
    fn image_drops_padding() {
        let mut buf = vec![0u8; 2 * 12];
        buf[0..4].copy_from_slice(&[1, 2, 3, 4]);
        buf[12..16].copy_from_slice(&[5, 6, 7, 8]);
        let img = to_image(&buf, 2, 2, 12).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3, 4]);
        assert_eq!(img.get_pixel(0, 1).0, [5, 6, 7, 8]);
    }
}
