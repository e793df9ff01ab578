use std::io::Cursor;

use bytes::Bytes;
use image::{ImageError, ImageReader, Limits};

use crate::domain::{
    common::entities::app_errors::CoreError, food_analysis::value_objects::LabelImage,
};

/// Largest accepted label picture edge, in pixels.
pub const MAX_IMAGE_DIMENSION: u32 = 6000;

/// Upper bound for the memory a single decode may allocate.
pub const MAX_DECODE_ALLOC: u64 = 128 * 1024 * 1024;

fn decode_limits() -> Limits {
    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_IMAGE_DIMENSION);
    limits.max_image_height = Some(MAX_IMAGE_DIMENSION);
    limits.max_alloc = Some(MAX_DECODE_ALLOC);
    limits
}

/// Checks that the bytes really are a decodable picture and returns its MIME
/// type as detected from the bytes, not as declared by the client.
///
/// Dimensions are checked against [`MAX_IMAGE_DIMENSION`] from the header,
/// before any pixel buffer is allocated.
pub fn decode_label_image(data: &[u8]) -> Result<&'static str, CoreError> {
    let mut reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| CoreError::ExtractionFailed(format!("failed to read image: {}", e)))?;

    let format = reader.format().ok_or_else(|| {
        CoreError::ExtractionFailed("unrecognized image format".to_string())
    })?;

    reader.limits(decode_limits());

    reader.decode().map_err(|e| match e {
        ImageError::Limits(e) => {
            CoreError::ExtractionFailed(format!("image exceeds decoding limits: {}", e))
        }
        e => CoreError::ExtractionFailed(format!("failed to decode image: {}", e)),
    })?;

    Ok(format.to_mime_type())
}

/// Runs [`decode_label_image`] on the blocking pool.
pub async fn validate_label_image(image: &LabelImage) -> Result<&'static str, CoreError> {
    let data: Bytes = image.data.clone();

    tokio::task::spawn_blocking(move || decode_label_image(&data))
        .await
        .map_err(|e| {
            tracing::error!("Image decoding task failed: {}", e);
            CoreError::InternalServerError
        })?
}
