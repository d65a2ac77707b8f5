/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

mod fetch;
mod upload;

use crate::error;
use crate::resize;
use crate::storage::ObjectStore;
use crate::types::ImageFormatTag;
/// Request type for generating a thumbnail
pub use input::{ThumbnailInput, ThumbnailInputBuilder};
/// Response type for a generated thumbnail
pub use output::ThumbnailOutput;

use std::sync::Arc;
use tracing::Instrument;

/// Operation struct for single object thumbnail generation
#[derive(Clone, Default, Debug)]
pub(crate) struct Thumbnail;

impl Thumbnail {
    /// Execute a single `Thumbnail` operation
    ///
    /// The stages run strictly in order: infer the format from the key, fetch the source,
    /// decode/resize/encode, upload. The first failing stage aborts the operation, the
    /// destination is only ever written once a thumbnail has been fully encoded.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ThumbnailInput,
    ) -> Result<ThumbnailOutput, error::Error> {
        let ctx = ThumbnailContext { handle };
        let source = input.source();
        let span = tracing::debug_span!("thumbnail", bucket = source.bucket(), key = source.key());

        async move {
            let format = ImageFormatTag::from_key(source.key())?;
            let destination = ctx.handle.config.naming().destination_for(&source);

            let object = fetch::fetch(&ctx, &source)
                .instrument(tracing::debug_span!("fetch"))
                .await?;
            let (body, content_type) = object.into_parts();

            let bounds = ctx.handle.config.bounding_box();
            let filter = ctx.handle.config.filter();
            let resize_format = format.clone();
            // spans do not follow work onto the blocking pool, enter it there explicitly
            let resize_span = tracing::debug_span!("resize");
            let thumbnail = tokio::task::spawn_blocking(move || {
                resize_span.in_scope(|| resize::thumbnail(&body, &resize_format, bounds, filter))
            })
            .await??;

            let size = thumbnail.body.len();
            upload::upload(&ctx, &destination, thumbnail.body, content_type.clone())
                .instrument(tracing::debug_span!("upload"))
                .await?;

            tracing::info!(
                "wrote {} thumbnail of {source} to {destination} ({} -> {})",
                format,
                thumbnail.source_dimensions,
                thumbnail.dimensions
            );

            Ok::<_, error::Error>(ThumbnailOutput {
                source,
                destination,
                format,
                content_type,
                source_dimensions: thumbnail.source_dimensions,
                dimensions: thumbnail.dimensions,
                size,
            })
        }
        .instrument(span)
        .await
    }
}

/// Context required to carry out a single thumbnail operation.
#[derive(Debug, Clone)]
pub(crate) struct ThumbnailContext {
    handle: Arc<crate::client::Handle>,
}

impl ThumbnailContext {
    /// The storage backend to read from and write to
    fn store(&self) -> &dyn ObjectStore {
        self.handle.config.store().as_ref()
    }
}
