/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Aspect preserving scaling into a bounding box.
//!
//! The scaling factor is the smaller of `max_width / width` and `max_height / height`: whichever
//! dimension would otherwise overflow the box binds. Both dimensions are multiplied by the same
//! factor so the aspect ratio is kept. Images smaller than the box are scaled up to fit it.
//!
//! Fractional results are rounded half away from zero to whole pixels and clamped to
//! `1..=max`, so a very thin source never produces an empty image.
//!
//! Animated GIFs stay animated: every frame is scaled to the same dimensions and keeps its
//! delay.

use std::io::Cursor;

use bytes::Bytes;
use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::imageops::{self, FilterType};
use image::{AnimationDecoder, DynamicImage, Frame, ImageDecoder, ImageFormat};

use crate::error::{self, ErrorKind};
use crate::types::{Dimensions, ImageFormatTag};

/// Compute the single factor both dimensions of `source` are multiplied by to fit `bounds`.
pub fn scaling_factor(source: Dimensions, bounds: Dimensions) -> f64 {
    let width_scale = f64::from(bounds.width()) / f64::from(source.width());
    let height_scale = f64::from(bounds.height()) / f64::from(source.height());
    width_scale.min(height_scale)
}

/// Compute the target dimensions of `source` scaled to fit inside `bounds`.
///
/// `source` must have a non-zero width and height.
pub fn scale_to_fit(source: Dimensions, bounds: Dimensions) -> Dimensions {
    let scale = scaling_factor(source, bounds);
    Dimensions::new(
        scale_dimension(scale, source.width(), bounds.width()),
        scale_dimension(scale, source.height(), bounds.height()),
    )
}

fn scale_dimension(scale: f64, value: u32, max: u32) -> u32 {
    let scaled = (scale * f64::from(value)).round() as u32;
    scaled.clamp(1, max.max(1))
}

/// A re-encoded thumbnail.
#[derive(Debug, Clone)]
pub(crate) struct Thumbnail {
    pub(crate) body: Bytes,
    pub(crate) source_dimensions: Dimensions,
    pub(crate) dimensions: Dimensions,
}

/// Decode `body` as `format`, scale it to fit `bounds` and encode it back to `format`.
///
/// GIF sources keep every frame along with its delay, all other formats are single images.
///
/// This is CPU bound work, callers running on an async runtime should move it off the
/// runtime threads.
pub(crate) fn thumbnail(
    body: &[u8],
    format: &ImageFormatTag,
    bounds: Dimensions,
    filter: FilterType,
) -> Result<Thumbnail, error::Error> {
    let codec = format.codec().ok_or_else(|| {
        error::Error::new(
            ErrorKind::DecodeFailed,
            format!("unsupported image format `{format}`"),
        )
    })?;

    if codec == ImageFormat::Gif {
        return animation_thumbnail(body, bounds, filter);
    }

    let image = image::load_from_memory_with_format(body, codec)
        .map_err(error::from_kind(ErrorKind::DecodeFailed))?;
    let source_dimensions = checked_dimensions(image.width(), image.height())?;
    let dimensions = target_dimensions(source_dimensions, bounds);

    let resized = image.resize_exact(dimensions.width(), dimensions.height(), filter);
    let body = encode(&resized, codec)?;

    Ok(Thumbnail {
        body,
        source_dimensions,
        dimensions,
    })
}

/// Resize every frame of a GIF, which may hold a single frame.
fn animation_thumbnail(
    body: &[u8],
    bounds: Dimensions,
    filter: FilterType,
) -> Result<Thumbnail, error::Error> {
    let decoder =
        GifDecoder::new(Cursor::new(body)).map_err(error::from_kind(ErrorKind::DecodeFailed))?;
    let (width, height) = decoder.dimensions();
    let source_dimensions = checked_dimensions(width, height)?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(error::from_kind(ErrorKind::DecodeFailed))?;
    if frames.is_empty() {
        return Err(error::Error::new(ErrorKind::DecodeFailed, "image has no frames"));
    }

    let dimensions = target_dimensions(source_dimensions, bounds);
    let animated = frames.len() > 1;
    let frames = frames.into_iter().map(|frame| {
        let delay = frame.delay();
        let resized =
            imageops::resize(frame.buffer(), dimensions.width(), dimensions.height(), filter);
        Frame::from_parts(resized, 0, 0, delay)
    });

    let mut buffer = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut buffer);
        if animated {
            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(error::from_kind(ErrorKind::EncodeFailed))?;
        }
        encoder
            .encode_frames(frames)
            .map_err(error::from_kind(ErrorKind::EncodeFailed))?;
    }

    Ok(Thumbnail {
        body: buffer.into(),
        source_dimensions,
        dimensions,
    })
}

fn checked_dimensions(width: u32, height: u32) -> Result<Dimensions, error::Error> {
    let dimensions = Dimensions::new(width, height);
    if width == 0 || height == 0 {
        return Err(error::Error::new(
            ErrorKind::DecodeFailed,
            format!("image has no pixels ({dimensions})"),
        ));
    }
    Ok(dimensions)
}

fn target_dimensions(source: Dimensions, bounds: Dimensions) -> Dimensions {
    let dimensions = scale_to_fit(source, bounds);
    tracing::trace!(
        "scaling {source} image to {dimensions} (factor {})",
        scaling_factor(source, bounds)
    );
    dimensions
}

fn encode(image: &DynamicImage, codec: ImageFormat) -> Result<Bytes, error::Error> {
    // rough estimate of 4 bytes per pixel (RGBA)
    let estimated_size = (image.width() as usize) * (image.height() as usize) * 4;
    let mut buffer = Cursor::new(Vec::with_capacity(estimated_size));
    image
        .write_to(&mut buffer, codec)
        .map_err(error::from_kind(ErrorKind::EncodeFailed))?;
    Ok(buffer.into_inner().into())
}
