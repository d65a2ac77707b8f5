/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_lambda_events::event::s3::S3Event;

use crate::error::{self, Error};
use crate::types::ObjectLocation;

/// The object an event notification is about.
///
/// The key is kept exactly as delivered: percent-encoded, with spaces encoded as `+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    bucket: String,
    raw_key: String,
}

impl Notification {
    /// Create a notification from a bucket name and a raw (encoded) object key.
    pub fn new(bucket: impl Into<String>, raw_key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            raw_key: raw_key.into(),
        }
    }

    /// Build a notification from the first record of an S3 event.
    ///
    /// Any further records are ignored.
    pub fn from_s3_event(event: &S3Event) -> Result<Self, Error> {
        let record = event
            .records
            .first()
            .ok_or_else(|| error::invalid_event("event contains no records"))?;

        if event.records.len() > 1 {
            tracing::warn!(
                "event contains {} records, only the first one is processed",
                event.records.len()
            );
        }

        let bucket = record
            .s3
            .bucket
            .name
            .as_deref()
            .ok_or_else(|| error::invalid_event("event record is missing the bucket name"))?;
        let raw_key = record
            .s3
            .object
            .key
            .as_deref()
            .ok_or_else(|| error::invalid_event("event record is missing the object key"))?;

        Ok(Self::new(bucket, raw_key))
    }

    /// The source bucket name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The object key as delivered in the event
    pub fn raw_key(&self) -> &str {
        &self.raw_key
    }

    /// The decoded source location.
    pub fn source(&self) -> Result<ObjectLocation, Error> {
        let key = decode_object_key(&self.raw_key)?;
        Ok(ObjectLocation::new(self.bucket.as_str(), key))
    }
}

/// Recover the actual object key from its event notification form.
///
/// Every literal `+` is a space, everything else is percent-decoded as UTF-8. A `%` that does
/// not start a two digit hex escape is rejected, as is a key that does not decode to UTF-8.
pub fn decode_object_key(raw_key: &str) -> Result<String, Error> {
    if !has_valid_escapes(raw_key) {
        return Err(error::invalid_event(format!(
            "object key `{raw_key}` contains a malformed percent escape"
        )));
    }

    let spaced = raw_key.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map_err(|err| {
        error::invalid_event(format!("object key `{raw_key}` is not valid UTF-8: {err}"))
    })?;
    Ok(decoded.into_owned())
}

fn has_valid_escapes(raw_key: &str) -> bool {
    raw_key.split('%').skip(1).all(|escape| {
        escape
            .as_bytes()
            .get(..2)
            .is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit))
    })
}
