/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use async_trait::async_trait;
use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use tracing::Instrument;

use super::{Error, ObjectStore, Result, StoredObject};
use crate::types::ObjectLocation;

/// [`ObjectStore`] backed by Amazon S3.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: aws_sdk_s3::Client,
}

impl S3Store {
    /// Create a store that sends requests with the given S3 client.
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn get_object(&self, location: &ObjectLocation) -> Result<StoredObject> {
        let resp = self
            .client
            .get_object()
            .bucket(location.bucket())
            .key(location.key())
            .send()
            .instrument(tracing::debug_span!("send-get-object"))
            .await?;

        let content_type = resp.content_type().map(str::to_owned);
        let body = resp
            .body
            .collect()
            .await
            .map_err(|err| Error::Transient(err.into()))?
            .into_bytes();

        Ok(StoredObject::new(body, content_type))
    }

    async fn put_object(&self, location: &ObjectLocation, object: StoredObject) -> Result<()> {
        let (body, content_type) = object.into_parts();
        let content_length: i64 = body
            .len()
            .try_into()
            .map_err(|_| Error::Other(format!("body length {} is invalid", body.len()).into()))?;

        self.client
            .put_object()
            .bucket(location.bucket())
            .key(location.key())
            .content_length(content_length)
            .set_content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .instrument(tracing::debug_span!("send-put-object"))
            .await?;

        Ok(())
    }
}

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: SdkError<E, R>) -> Self {
        if let Some(err) = value.code().and_then(from_code) {
            return err;
        }

        match value {
            SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
                Error::Transient(value.into())
            }
            other => Error::Other(other.into()),
        }
    }
}

/// Map well known S3 error codes onto storage errors
fn from_code(code: &str) -> Option<Error> {
    let err = match code {
        "NotFound" | "NoSuchKey" => Error::NotFound,
        "NoSuchBucket" => Error::NoSuchBucket,
        "AccessDenied" | "Forbidden" | "AllAccessDisabled" => Error::AccessDenied,
        "QuotaExceeded" | "ServiceQuotaExceeded" | "EntityTooLarge" => Error::QuotaExceeded,
        _ => return None,
    };
    Some(err)
}
