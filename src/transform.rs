//! Transform Module
//!
//! Boundary for the byte-stream transform, plus the concrete resize
//! implementation: decode the source image, scale it to the requested
//! dimensions, encode JPEG to the output sink.

use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use thiserror::Error;

// == Transform Error Enum ==
/// Errors surfaced by a transform.
#[derive(Error, Debug)]
pub enum TransformError {
    /// Source bytes are not a decodable image
    #[error("failed to decode source image: {0}")]
    Decode(image::ImageError),

    /// Encoding or writing the output failed
    #[error("failed to encode output image: {0}")]
    Encode(image::ImageError),
}

// == Transform Trait ==
/// Byte-stream transform: source bytes plus two positive dimensions in,
/// output bytes streamed to the sink.
///
/// Implementations must be deterministic, producing byte-identical output
/// for the same input and dimensions, and must fail on malformed input
/// rather than guess. Dimension validation is the caller's job.
pub trait Transform: Send + Sync {
    /// Transforms `input` and writes the result to `out`.
    fn apply(
        &self,
        input: &[u8],
        width: u32,
        height: u32,
        out: &mut dyn Write,
    ) -> Result<(), TransformError>;
}

// == JPEG Resizer ==
/// Resizes any supported source format to an exact-size JPEG.
///
/// Accepts png, jpeg, gif, bmp, and tiff sources; the output is always
/// JPEG at quality 100, scaled with Lanczos3 to exactly the requested
/// dimensions (aspect ratio is not preserved).
#[derive(Debug, Default)]
pub struct JpegResizer;

impl Transform for JpegResizer {
    fn apply(
        &self,
        input: &[u8],
        width: u32,
        height: u32,
        out: &mut dyn Write,
    ) -> Result<(), TransformError> {
        let img = image::load_from_memory(input).map_err(TransformError::Decode)?;

        // JPEG has no alpha channel
        let resized = img.resize_exact(width, height, FilterType::Lanczos3).into_rgb8();

        let encoder = JpegEncoder::new_with_quality(out, 100);
        resized
            .write_with_encoder(encoder)
            .map_err(TransformError::Encode)?;

        Ok(())
    }
}
