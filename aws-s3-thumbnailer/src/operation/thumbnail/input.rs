/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use crate::types::ObjectLocation;

/// Request type for generating the thumbnail of a single object
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThumbnailInput {
    /// The bucket containing the source image.
    pub bucket: String,

    /// The key of the source image (decoded, not in event notification form).
    pub key: String,
}

impl ThumbnailInput {
    /// Creates a new builder-style object to manufacture [`ThumbnailInput`](crate::operation::thumbnail::ThumbnailInput).
    pub fn builder() -> ThumbnailInputBuilder {
        ThumbnailInputBuilder::default()
    }

    /// The bucket containing the source image.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key of the source image.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn source(&self) -> ObjectLocation {
        ObjectLocation::new(self.bucket.as_str(), self.key.as_str())
    }
}

impl From<ObjectLocation> for ThumbnailInput {
    fn from(value: ObjectLocation) -> Self {
        Self {
            bucket: value.bucket().to_owned(),
            key: value.key().to_owned(),
        }
    }
}

/// A builder for [`ThumbnailInput`].
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThumbnailInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
}

impl ThumbnailInputBuilder {
    /// The bucket containing the source image.
    ///
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket containing the source image.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket containing the source image.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// The key of the source image.
    ///
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The key of the source image.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// The key of the source image.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Consumes the builder and constructs a [`ThumbnailInput`].
    pub fn build(self) -> Result<ThumbnailInput, error::Error> {
        let bucket = self
            .bucket
            .filter(|bucket| !bucket.is_empty())
            .ok_or_else(|| error::invalid_input("bucket is required"))?;
        let key = self
            .key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| error::invalid_input("key is required"))?;
        Ok(ThumbnailInput { bucket, key })
    }
}
