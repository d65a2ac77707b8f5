/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;

use crate::error::{self, ErrorKind};
use crate::storage::StoredObject;
use crate::types::ObjectLocation;

use super::ThumbnailContext;

/// Write the encoded thumbnail to the destination.
///
/// The content type is the one declared by the source object, it is never re-derived from the
/// encoded bytes. Any storage failure is reported as [`ErrorKind::UploadFailed`].
pub(super) async fn upload(
    ctx: &ThumbnailContext,
    destination: &ObjectLocation,
    body: Bytes,
    content_type: Option<String>,
) -> Result<(), error::Error> {
    let size = body.len();
    ctx.store()
        .put_object(destination, StoredObject::new(body, content_type))
        .await
        .map_err(error::from_kind(ErrorKind::UploadFailed))?;

    tracing::trace!("uploaded {size} bytes to {destination}");
    Ok(())
}
