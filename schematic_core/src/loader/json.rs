// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: JSON figure loader

use crate::error::Result;
use crate::figure::Figure;
use log::debug;
use std::io::Read;

/// Load a figure from a reader containing figure JSON.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Figure> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    let figure: Figure = serde_json::from_str(&s)?;
    debug!(
        "loaded figure {}x{} with {} items",
        figure.width,
        figure.height,
        figure.items.len()
    );
    Ok(figure)
}

/// Load a figure directly from a byte slice containing figure JSON.
pub fn from_slice(data: &[u8]) -> Result<Figure> {
    let cursor = std::io::Cursor::new(data);
    from_reader(cursor)
}

/// Load a figure from a file.
pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Figure> {
    let file = std::fs::File::open(path)?;
    from_reader(std::io::BufReader::new(file))
}

/// Serialize a figure back to pretty-printed JSON.
pub fn to_string(figure: &Figure) -> Result<String> {
    Ok(serde_json::to_string_pretty(figure)?)
}
