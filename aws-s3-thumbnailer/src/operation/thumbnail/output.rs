/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::{Dimensions, ImageFormatTag, ObjectLocation};

/// Response type for a generated thumbnail
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThumbnailOutput {
    pub(crate) source: ObjectLocation,
    pub(crate) destination: ObjectLocation,
    pub(crate) format: ImageFormatTag,
    pub(crate) content_type: Option<String>,
    pub(crate) source_dimensions: Dimensions,
    pub(crate) dimensions: Dimensions,
    pub(crate) size: usize,
}

impl ThumbnailOutput {
    /// Where the source image was read from
    pub fn source(&self) -> &ObjectLocation {
        &self.source
    }

    /// Where the thumbnail was written to
    pub fn destination(&self) -> &ObjectLocation {
        &self.destination
    }

    /// Format of both the source image and the thumbnail
    pub fn format(&self) -> &ImageFormatTag {
        &self.format
    }

    /// Content type the thumbnail was stored with (copied from the source object)
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Dimensions of the source image
    pub fn source_dimensions(&self) -> Dimensions {
        self.source_dimensions
    }

    /// Dimensions of the thumbnail
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Size of the encoded thumbnail in bytes
    pub fn size(&self) -> usize {
        self.size
    }
}
