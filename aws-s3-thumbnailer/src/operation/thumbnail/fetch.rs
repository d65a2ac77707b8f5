/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, ErrorKind};
use crate::storage::StoredObject;
use crate::types::ObjectLocation;

use super::ThumbnailContext;

/// Retrieve the full content and content type of the source object.
///
/// Any storage failure (missing object, denied access, network issue) is reported as
/// [`ErrorKind::FetchFailed`] with the storage error as source.
pub(super) async fn fetch(
    ctx: &ThumbnailContext,
    source: &ObjectLocation,
) -> Result<StoredObject, error::Error> {
    let object = ctx
        .store()
        .get_object(source)
        .await
        .map_err(error::from_kind(ErrorKind::FetchFailed))?;

    tracing::trace!(
        "fetched {} bytes from {source} (content type: {:?})",
        object.body().len(),
        object.content_type()
    );
    Ok(object)
}
