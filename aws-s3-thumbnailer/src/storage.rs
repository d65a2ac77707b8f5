/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Object storage backends.
//!
//! The pipeline only needs two storage operations: read a whole object and write a whole
//! object. [`ObjectStore`] captures exactly that so the backend can be injected (an Amazon S3
//! client in production, [`InMemoryStore`] for tests and local runs).

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt::Debug;
use std::sync::Arc;

use crate::error::BoxError;
use crate::types::ObjectLocation;

pub(crate) mod in_memory;
pub(crate) mod s3;

pub use in_memory::InMemoryStore;
pub use s3::S3Store;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by an [`ObjectStore`].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The object does not exist.
    #[error("no such key")]
    NotFound,

    /// The bucket does not exist.
    #[error("no such bucket")]
    NoSuchBucket,

    /// The caller is not allowed to perform the operation.
    #[error("access denied")]
    AccessDenied,

    /// A storage quota or size limit was exceeded.
    #[error("quota exceeded")]
    QuotaExceeded,

    /// A transient failure (timeout, connection reset, truncated response).
    #[error("transient failure: {0}")]
    Transient(#[source] BoxError),

    /// Any other failure reported by the backend.
    #[error("storage error: {0}")]
    Other(#[source] BoxError),
}

/// The full content of a stored object along with its declared content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    body: Bytes,
    content_type: Option<String>,
}

impl StoredObject {
    /// Create a new stored object
    pub fn new(body: impl Into<Bytes>, content_type: Option<String>) -> Self {
        Self {
            body: body.into(),
            content_type,
        }
    }

    /// The object content
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The declared content type, if any
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Consume the object, returning the body and content type
    pub fn into_parts(self) -> (Bytes, Option<String>) {
        (self.body, self.content_type)
    }
}

/// A storage backend capable of reading and writing whole objects.
#[async_trait]
pub trait ObjectStore: Send + Sync + Debug {
    /// Retrieve the full content and content type of the object at `location`.
    async fn get_object(&self, location: &ObjectLocation) -> Result<StoredObject>;

    /// Write `object` to `location`, replacing any existing object.
    async fn put_object(&self, location: &ObjectLocation, object: StoredObject) -> Result<()>;
}

#[async_trait]
impl<T> ObjectStore for Arc<T>
where
    T: ObjectStore + ?Sized,
{
    async fn get_object(&self, location: &ObjectLocation) -> Result<StoredObject> {
        (**self).get_object(location).await
    }

    async fn put_object(&self, location: &ObjectLocation, object: StoredObject) -> Result<()> {
        (**self).put_object(location, object).await
    }
}
