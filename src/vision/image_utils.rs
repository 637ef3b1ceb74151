// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Decoding of uploaded gesture frames

use image::{DynamicImage, ImageFormat};
use thiserror::Error;

/// Maximum accepted upload size (10MB)
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Errors produced while turning an upload into a usable image
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload is empty")]
    Empty,

    #[error("upload is too large: {0} bytes (max: {1} bytes)")]
    TooLarge(usize, usize),

    #[error("unrecognized image format")]
    UnsupportedFormat,

    #[error("failed to decode image: {0}")]
    DecodeFailed(String),
}

/// Decode the raw bytes of a multipart upload into an image.
///
/// The format is sniffed from the leading magic bytes rather than trusted
/// from the client-supplied content type.
///
/// # Errors
/// * [`UploadError::Empty`] / [`UploadError::TooLarge`] - size checks
/// * [`UploadError::UnsupportedFormat`] - unknown magic bytes
/// * [`UploadError::DecodeFailed`] - recognized format, corrupted data
pub fn decode_upload(bytes: &[u8]) -> Result<DynamicImage, UploadError> {
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge(bytes.len(), MAX_UPLOAD_BYTES));
    }

    let format = sniff_format(bytes)?;
    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| UploadError::DecodeFailed(e.to_string()))
}

/// Detect an image format from magic bytes.
pub fn sniff_format(bytes: &[u8]) -> Result<ImageFormat, UploadError> {
    if bytes.len() < 4 {
        return Err(UploadError::UnsupportedFormat);
    }

    match bytes {
        // PNG: 89 50 4E 47
        [0x89, 0x50, 0x4E, 0x47, ..] => Ok(ImageFormat::Png),

        // JPEG: FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => Ok(ImageFormat::Jpeg),

        // WebP: RIFF .... WEBP
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Ok(ImageFormat::WebP),

        // GIF: GIF87a or GIF89a
        [0x47, 0x49, 0x46, 0x38, x, ..] if *x == 0x37 || *x == 0x39 => Ok(ImageFormat::Gif),

        // BMP: BM
        [0x42, 0x4D, ..] => Ok(ImageFormat::Bmp),

        _ => Err(UploadError::UnsupportedFormat),
    }
}
