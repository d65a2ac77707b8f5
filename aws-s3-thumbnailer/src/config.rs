/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use image::imageops::FilterType;

use crate::storage::{ObjectStore, S3Store};
use crate::types::{Dimensions, NamingConvention};
use crate::DEFAULT_MAX_DIMENSION;

pub(crate) mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    bounding_box: Dimensions,
    naming: NamingConvention,
    filter: FilterType,
    store: Arc<dyn ObjectStore>,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the maximum width and height of a generated thumbnail
    pub fn bounding_box(&self) -> Dimensions {
        self.bounding_box
    }

    /// Returns the convention used to derive destination locations
    pub fn naming(&self) -> &NamingConvention {
        &self.naming
    }

    /// Returns the resampling filter used when resizing
    pub fn filter(&self) -> FilterType {
        self.filter
    }

    /// The storage backend objects are read from and thumbnails written to.
    pub fn store(&self) -> &Arc<dyn ObjectStore> {
        &self.store
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone)]
pub struct Builder {
    bounding_box: Dimensions,
    naming: NamingConvention,
    filter: FilterType,
    store: Option<Arc<dyn ObjectStore>>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            bounding_box: Dimensions::new(DEFAULT_MAX_DIMENSION, DEFAULT_MAX_DIMENSION),
            naming: NamingConvention::default(),
            filter: FilterType::Lanczos3,
            store: None,
        }
    }
}

impl Builder {
    /// Maximum width and height of a generated thumbnail.
    ///
    /// A dimension of zero is raised to one pixel.
    /// Default is 50x50.
    pub fn bounding_box(mut self, max_width: u32, max_height: u32) -> Self {
        self.bounding_box = Dimensions::new(max_width.max(1), max_height.max(1));
        self
    }

    /// Convention used to derive the destination bucket and key from the source.
    ///
    /// Default is [`NamingConvention::default`] (`<bucket>-resize`, `resized-<key>`).
    pub fn naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    /// Resampling filter used when resizing.
    ///
    /// Default is [`FilterType::Lanczos3`].
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Set an explicit storage backend to use.
    pub fn store(mut self, store: impl ObjectStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set an explicit S3 client to use.
    ///
    /// This is shorthand for `store(S3Store::new(client))`.
    pub fn client(self, client: aws_sdk_s3::Client) -> Self {
        self.store(S3Store::new(client))
    }

    /// Consumes the builder and constructs a [`Config`]
    pub fn build(self) -> Config {
        Config {
            bounding_box: self.bounding_box,
            naming: self.naming,
            filter: self.filter,
            store: self.store.expect("object store set"),
        }
    }
}
