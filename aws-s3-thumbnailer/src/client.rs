/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_lambda_events::event::s3::S3Event;
use std::sync::Arc;

use crate::error::Error;
use crate::event::Notification;
use crate::operation::thumbnail::{Thumbnail, ThumbnailInput, ThumbnailOutput};
use crate::Config;

/// Thumbnailer client.
///
/// Cloning a client is cheap, every clone shares the same configuration and storage backend.
/// Construct one per process and reuse it across invocations.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, storage backend, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a thumbnailer config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Generate a thumbnail for a single object.
    ///
    /// Constructs a fluent builder for the
    /// [`Thumbnail`](crate::operation::thumbnail::builders::ThumbnailFluentBuilder) operation.
    /// The key given to the builder is the actual object key, not the percent-encoded form
    /// found in event notifications.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::error::Error;
    ///
    /// async fn make_thumbnail(
    ///     client: &aws_s3_thumbnailer::Client,
    /// ) -> Result<(), Box<dyn Error>> {
    ///     let output = client.thumbnail()
    ///         .bucket("photos")
    ///         .key("holiday/beach.jpg")
    ///         .send()
    ///         .await?;
    ///
    ///     println!("wrote {} ({})", output.destination(), output.dimensions());
    ///     Ok(())
    /// }
    /// ```
    pub fn thumbnail(&self) -> crate::operation::thumbnail::builders::ThumbnailFluentBuilder {
        crate::operation::thumbnail::builders::ThumbnailFluentBuilder::new(self.handle.clone())
    }

    /// Generate a thumbnail for the object described by an S3 event notification.
    ///
    /// Only the first record of the event is used.
    pub async fn handle_event(&self, event: &S3Event) -> Result<ThumbnailOutput, Error> {
        let notification = Notification::from_s3_event(event)?;
        let source = notification.source()?;
        let input = ThumbnailInput::from(source);
        Thumbnail::orchestrate(self.handle.clone(), input).await
    }
}
