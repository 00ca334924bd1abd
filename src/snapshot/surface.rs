//! Off-screen raster surfaces and payload encoding.

use base64::Engine;
use image::{ImageBuffer, ImageFormat, Rgba};

use super::types::SnapError;

/// Prefix of the textual payload form.
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// An off-screen RGBA8 pixel buffer produced by rendering a plate region.
///
/// The surface is owned by the snapshot that created it and is discarded once
/// a payload has been extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterSurface {
    /// Wraps a raw RGBA8 buffer. The buffer length must be exactly
    /// `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, SnapError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(SnapError::RenderFailed(format!(
                "surface buffer is {} bytes, expected {} for {}x{} RGBA",
                pixels.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Encodes the surface as a PNG byte stream (the Variant A payload).
    pub fn encode_png(&self) -> Result<Vec<u8>, SnapError> {
        let buffer: ImageBuffer<Rgba<u8>, _> =
            ImageBuffer::from_raw(self.width, self.height, self.pixels.clone()).ok_or_else(
                || {
                    SnapError::EncodeFailed(format!(
                        "pixel buffer does not match {}x{} dimensions",
                        self.width, self.height
                    ))
                },
            )?;

        let mut encoded = Vec::new();
        buffer
            .write_to(&mut std::io::Cursor::new(&mut encoded), ImageFormat::Png)
            .map_err(|e| SnapError::EncodeFailed(e.to_string()))?;

        log::debug!(
            "Encoded {}x{} surface to {} PNG bytes",
            self.width,
            self.height,
            encoded.len()
        );
        Ok(encoded)
    }

    /// Encodes the surface as a `data:image/png;base64,` string (the
    /// Variant B payload). Paste targets that expect a binary image will not
    /// recognize this form without decoding it first.
    pub fn to_data_url(&self) -> Result<String, SnapError> {
        let png = self.encode_png()?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
        Ok(format!("{DATA_URL_PREFIX}{encoded}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    fn checker_surface() -> RasterSurface {
        let mut pixels = Vec::with_capacity(4 * 4 * 4);
        for y in 0..4u32 {
            for x in 0..4u32 {
                let on = (x + y) % 2 == 0;
                pixels.extend_from_slice(if on {
                    &[255, 255, 255, 255]
                } else {
                    &[0, 0, 0, 255]
                });
            }
        }
        RasterSurface::from_rgba8(4, 4, pixels).unwrap()
    }

    #[test]
    fn rejects_mismatched_buffer_length() {
        let err = RasterSurface::from_rgba8(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, SnapError::RenderFailed(_)));
    }

    #[test]
    fn encode_png_produces_png_stream() {
        let png = checker_surface().encode_png().unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn data_url_decodes_back_to_the_same_png() {
        let surface = checker_surface();
        let url = surface.to_data_url().unwrap();
        let payload = url.strip_prefix(DATA_URL_PREFIX).expect("missing prefix");

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        assert_eq!(decoded, surface.encode_png().unwrap());
        assert_eq!(&decoded[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn encoding_is_deterministic() {
        let surface = checker_surface();
        assert_eq!(
            surface.encode_png().unwrap(),
            surface.encode_png().unwrap()
        );
    }
}
