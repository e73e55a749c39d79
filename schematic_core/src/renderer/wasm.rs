// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: wasm renderer

use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::ImageData;

use super::MAX_RASTER_SIDE;
use crate::{error::Error, figure::Figure, loader::json};

#[wasm_bindgen]
pub struct SchematicWasm {
    figure: Figure,
    buffer: Vec<u8>,
}

#[wasm_bindgen]
impl SchematicWasm {
    /// Create a new renderer from figure JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(data: &str) -> Result<SchematicWasm, JsValue> {
        let figure =
            json::from_slice(data.as_bytes()).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            figure,
            buffer: Vec::new(),
        })
    }

    /// Number of drawable items in the figure.
    #[wasm_bindgen]
    pub fn items(&self) -> u32 {
        self.figure.items.len() as u32
    }

    /// Render the figure into a new [`ImageData`] of the requested size.
    #[wasm_bindgen]
    pub fn render(&mut self, width: u32, height: u32) -> Result<ImageData, JsValue> {
        let (w, h) = (width as usize, height as usize);
        if w > MAX_RASTER_SIDE || h > MAX_RASTER_SIDE {
            let err = Error::RasterTooLarge {
                width: w,
                height: h,
            };
            return Err(JsValue::from_str(&err.to_string()));
        }
        self.buffer.clear();
        self.buffer.resize(w * h * 4, 0);
        self.figure
            .render_sync(&mut self.buffer, w, h, w * 4)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        ImageData::new_with_u8_clamped_array_and_sh(Clamped(self.buffer.as_slice()), width, height)
    }
}
