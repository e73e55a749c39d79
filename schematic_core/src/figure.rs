// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: figure description and rendering
//!
//! A [`Figure`] lists connectors and lattice sections with their stroke
//! styles. Rendering fits all of them into the raster with equal aspect and
//! the world y axis pointing up.

use crate::error::{Error, GeometryError, Result};
use crate::geometry::{LatticeParams, ZigzagParams, MAX_POINTS};
use crate::renderer::{self, Canvas, RasterCanvas, RecordingCanvas, Viewport, MAX_RASTER_SIDE};
use crate::types::{Bounds, Color, StrokeStyle, Vec2};
use image::{ImageFormat, RgbaImage};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Zig-zag connector between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZigzagItem {
    pub start: Vec2,
    pub end: Vec2,
    #[serde(flatten)]
    pub params: ZigzagParams,
    #[serde(default = "zigzag_stroke")]
    pub stroke: StrokeStyle,
}

/// Lattice cross-section centred on the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeItem {
    #[serde(flatten)]
    pub params: LatticeParams,
    #[serde(default)]
    pub stroke: StrokeStyle,
}

fn zigzag_stroke() -> StrokeStyle {
    StrokeStyle::new(Color::BLACK, 1.5)
}

/// Drawable figure element, tagged by `"type"` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Item {
    Zigzag(ZigzagItem),
    Lattice(LatticeItem),
}

impl Item {
    pub fn zigzag(start: Vec2, end: Vec2, params: ZigzagParams) -> Self {
        Item::Zigzag(ZigzagItem {
            start,
            end,
            params,
            stroke: zigzag_stroke(),
        })
    }

    pub fn lattice(params: LatticeParams) -> Self {
        Item::Lattice(LatticeItem {
            params,
            stroke: StrokeStyle::default(),
        })
    }

    /// Replace the item's stroke style.
    pub fn with_stroke(mut self, style: StrokeStyle) -> Self {
        match &mut self {
            Item::Zigzag(z) => z.stroke = style,
            Item::Lattice(l) => l.stroke = style,
        }
        self
    }
}

/// Raster size, background and the items to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Free border in pixels
    #[serde(default = "default_margin")]
    pub margin: f32,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default)]
    pub items: Vec<Item>,
}

fn default_margin() -> f32 {
    10.0
}

fn default_background() -> Color {
    Color::WHITE
}

impl Figure {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: default_margin(),
            background: default_background(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: Item) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Generate every item's geometry, in item order.
    ///
    /// A zero-length connector is logged and skipped; any other rejected item
    /// fails the whole figure, as does a figure whose items together exceed
    /// [`MAX_POINTS`].
    pub fn record(&self) -> std::result::Result<RecordingCanvas, GeometryError> {
        let mut rec = RecordingCanvas::new();
        let mut points = 0usize;
        for (index, item) in self.items.iter().enumerate() {
            let before = rec.strokes.len();
            match item {
                Item::Zigzag(z) => {
                    match renderer::draw_zigzag(&mut rec, z.start, z.end, &z.params, &z.stroke) {
                        Err(GeometryError::ZeroLength) => {
                            warn!("figure item {index}: zero-length zigzag skipped");
                        }
                        other => other?,
                    }
                }
                Item::Lattice(l) => renderer::draw_lattice(&mut rec, &l.params, &l.stroke)?,
            }
            points += rec.strokes[before..].iter().map(|s| s.line.len()).sum::<usize>();
            if points > MAX_POINTS {
                return Err(GeometryError::InvalidParameter {
                    name: "items",
                    value: index as f32,
                    reason: "figure exceeds the point budget",
                });
            }
        }
        Ok(rec)
    }

    /// World-space bounds of all generated geometry.
    pub fn bounds(&self) -> std::result::Result<Option<Bounds>, GeometryError> {
        Ok(self.record()?.bounds())
    }

    /// Render into a caller supplied RGBA8888 buffer.
    ///
    /// The raster size passed here wins over `width`/`height` of the figure.
    pub fn render_sync(
        &self,
        buffer: &mut [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<()> {
        let rec = self.record()?;
        let mut canvas = RasterCanvas::new(buffer, width, height, stride)?;
        canvas.clear(self.background);
        if let Some(bounds) = rec.bounds() {
            canvas = canvas.with_viewport(Viewport::fit(bounds, width, height, self.margin));
        }
        info!(
            "rendering {} strokes into {width}x{height}",
            rec.strokes.len()
        );
        rec.replay(&mut canvas);
        Ok(())
    }

    /// Render at the figure's own size, at most [`MAX_RASTER_SIDE`] pixels per side.
    pub fn render_image(&self) -> Result<RgbaImage> {
        let (w, h) = (self.width as usize, self.height as usize);
        if w > MAX_RASTER_SIDE || h > MAX_RASTER_SIDE {
            return Err(Error::RasterTooLarge {
                width: w,
                height: h,
            });
        }
        let mut buf = vec![0u8; w * h * 4];
        self.render_sync(&mut buf, w, h, w * 4)?;
        renderer::to_image(&buf, w, h, w * 4)
    }

    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        self.render_image()?
            .save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

/// Draw a figure's items onto an arbitrary canvas, in world coordinates.
pub fn draw_figure<C: Canvas + ?Sized>(
    figure: &Figure,
    canvas: &mut C,
) -> std::result::Result<(), GeometryError> {
    figure.record()?.replay(canvas);
    Ok(())
}
