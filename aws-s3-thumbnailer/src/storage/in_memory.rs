/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! In-memory implementation of the ObjectStore trait.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Error, ObjectStore, Result, StoredObject};
use crate::types::ObjectLocation;

/// An in-memory implementation of the [`ObjectStore`] trait.
///
/// Buckets have to be created with [`create_bucket`](InMemoryStore::create_bucket) before
/// objects can be written to them, the same way a destination bucket has to be provisioned
/// before thumbnails can land in it.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    // bucket -> (key -> object)
    buckets: RwLock<HashMap<String, HashMap<String, StoredObject>>>,
    denied: RwLock<HashSet<String>>,
    writes: AtomicUsize,
}

impl InMemoryStore {
    /// Create a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bucket. Creating a bucket that already exists is a no-op.
    pub async fn create_bucket(&self, bucket: &str) {
        let mut buckets = self.buckets.write().await;
        buckets.entry(bucket.to_owned()).or_default();
    }

    /// Reject every subsequent request against `bucket` with [`Error::AccessDenied`].
    pub async fn deny_access(&self, bucket: &str) {
        let mut denied = self.denied.write().await;
        denied.insert(bucket.to_owned());
    }

    /// Look up an object without going through the [`ObjectStore`] interface.
    pub async fn object(&self, location: &ObjectLocation) -> Option<StoredObject> {
        let buckets = self.buckets.read().await;
        buckets
            .get(location.bucket())
            .and_then(|objects| objects.get(location.key()))
            .cloned()
    }

    /// Number of successful writes performed through [`ObjectStore::put_object`].
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    async fn check_access(&self, bucket: &str) -> Result<()> {
        if self.denied.read().await.contains(bucket) {
            return Err(Error::AccessDenied);
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn get_object(&self, location: &ObjectLocation) -> Result<StoredObject> {
        self.check_access(location.bucket()).await?;
        let buckets = self.buckets.read().await;
        let objects = buckets.get(location.bucket()).ok_or(Error::NoSuchBucket)?;
        objects.get(location.key()).cloned().ok_or(Error::NotFound)
    }

    async fn put_object(&self, location: &ObjectLocation, object: StoredObject) -> Result<()> {
        self.check_access(location.bucket()).await?;
        let mut buckets = self.buckets.write().await;
        let objects = buckets
            .get_mut(location.bucket())
            .ok_or(Error::NoSuchBucket)?;
        objects.insert(location.key().to_owned(), object);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> ObjectLocation {
        ObjectLocation::new("photos", "cat.png")
    }

    #[tokio::test]
    async fn test_put_and_get_object() {
        let storage = InMemoryStore::new();
        storage.create_bucket("photos").await;
        let object = StoredObject::new(&b"test content"[..], Some("image/png".to_owned()));

        storage.put_object(&location(), object.clone()).await.unwrap();

        let retrieved = storage.get_object(&location()).await.unwrap();
        assert_eq!(object, retrieved);
        assert_eq!(1, storage.writes());
    }

    #[tokio::test]
    async fn test_get_missing_object() {
        let storage = InMemoryStore::new();
        storage.create_bucket("photos").await;

        let result = storage.get_object(&location()).await;
        assert!(matches!(result.unwrap_err(), Error::NotFound));
    }

    #[tokio::test]
    async fn test_put_requires_bucket() {
        let storage = InMemoryStore::new();
        let object = StoredObject::new(&b"test content"[..], None);

        let result = storage.put_object(&location(), object).await;
        assert!(matches!(result.unwrap_err(), Error::NoSuchBucket));
        assert_eq!(0, storage.writes());
        assert!(storage.object(&location()).await.is_none());
    }

    #[tokio::test]
    async fn test_denied_bucket() {
        let storage = InMemoryStore::new();
        storage.create_bucket("photos").await;
        storage.deny_access("photos").await;

        let result = storage.get_object(&location()).await;
        assert!(matches!(result.unwrap_err(), Error::AccessDenied));

        let object = StoredObject::new(&b"test content"[..], None);
        let result = storage.put_object(&location(), object).await;
        assert!(matches!(result.unwrap_err(), Error::AccessDenied));
    }
}
