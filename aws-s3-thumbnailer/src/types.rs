/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use crate::error::{self, ErrorKind};

/// Default suffix appended to the source bucket name to derive the destination bucket
pub const DEFAULT_BUCKET_SUFFIX: &str = "-resize";

/// Default prefix prepended to the source key to derive the destination key
pub const DEFAULT_KEY_PREFIX: &str = "resized-";

/// A `(bucket, key)` pair identifying a stored object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectLocation {
    bucket: String,
    key: String,
}

impl ObjectLocation {
    /// Create a new location from a bucket name and an (already decoded) object key.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// The bucket name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The object key
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Create new dimensions
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Image format inferred from the extension of an object key.
///
/// The tag is used both to decode the source and to encode the thumbnail, output format always
/// equals input format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageFormatTag(String);

impl ImageFormatTag {
    /// Infer the format tag from an object key.
    ///
    /// The tag is everything after the final `.` in the key, lowercased. Fails with
    /// [`ErrorKind::UnrecognizedFormat`] if the key contains no `.` at all.
    pub fn from_key(key: &str) -> Result<Self, error::Error> {
        let (_, extension) = key.rsplit_once('.').ok_or_else(|| {
            error::Error::new(
                ErrorKind::UnrecognizedFormat,
                format!("unable to infer image format from key `{key}`"),
            )
        })?;
        Ok(Self(extension.to_lowercase()))
    }

    /// The lowercased extension
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The codec matching this tag, if the extension is one the codec understands.
    pub(crate) fn codec(&self) -> Option<image::ImageFormat> {
        image::ImageFormat::from_extension(&self.0)
    }
}

impl fmt::Display for ImageFormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deterministic mapping from a source location to the location its thumbnail is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    bucket_suffix: String,
    key_prefix: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            bucket_suffix: DEFAULT_BUCKET_SUFFIX.to_owned(),
            key_prefix: DEFAULT_KEY_PREFIX.to_owned(),
        }
    }
}

impl NamingConvention {
    /// Create a naming convention with an explicit bucket suffix and key prefix.
    pub fn new(bucket_suffix: impl Into<String>, key_prefix: impl Into<String>) -> Self {
        Self {
            bucket_suffix: bucket_suffix.into(),
            key_prefix: key_prefix.into(),
        }
    }

    /// Suffix appended to the source bucket name
    pub fn bucket_suffix(&self) -> &str {
        &self.bucket_suffix
    }

    /// Prefix prepended to the source key
    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    /// Derive the destination location for the given source.
    pub fn destination_for(&self, source: &ObjectLocation) -> ObjectLocation {
        ObjectLocation {
            bucket: format!("{}{}", source.bucket, self.bucket_suffix),
            key: format!("{}{}", self.key_prefix, source.key),
        }
    }
}
