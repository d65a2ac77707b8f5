/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{ThumbnailInputBuilder, ThumbnailOutput};

/// Fluent builder for constructing a single object thumbnail operation
#[derive(Debug)]
pub struct ThumbnailFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ThumbnailInputBuilder,
}

impl ThumbnailFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Fetch, resize and upload the thumbnail for a single object
    pub async fn send(self) -> Result<ThumbnailOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::thumbnail::Thumbnail::orchestrate(self.handle, input).await
    }

    /// The bucket containing the source image.
    ///
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket containing the source image.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket containing the source image.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// The key of the source image.
    ///
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// The key of the source image.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// The key of the source image.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }
}

impl crate::operation::thumbnail::input::ThumbnailInputBuilder {
    /// Generate the thumbnail for this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<ThumbnailOutput, Error> {
        let mut fluent_builder = client.thumbnail();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
