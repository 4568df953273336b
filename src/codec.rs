// src/codec.rs
//! PNG + base64 encoding of the captured drawing for inline transport.

use std::io::Cursor;

use anyhow::Result;
use base64::Engine;
use image::{ImageFormat, RgbaImage};

/// Encode the drawing as PNG bytes, in memory.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::debug!("encoded drawing to {} PNG bytes", bytes.len());
    Ok(bytes)
}

/// Wrap PNG bytes as a base64 data URI suitable for an `image_url` content
/// block in a chat-completions request.
pub fn to_data_uri(png_bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(png_bytes);
    format!("data:image/png;base64,{}", encoded)
}

/// Full codec step: RGBA buffer -> PNG -> base64 data URI.
pub fn encode_drawing(img: &RgbaImage) -> Result<String> {
    let png = encode_png(img)?;
    Ok(to_data_uri(&png))
}
