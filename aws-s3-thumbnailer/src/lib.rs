/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Event driven thumbnail generation for images stored in Amazon S3.
//!
//! When an object is created in a source bucket, the thumbnailer fetches it, decodes it as an
//! image, scales it to fit inside a fixed bounding box (preserving aspect ratio), re-encodes it
//! in the same format and writes the result to a destination bucket derived from the source.
//!
//! The naming convention is a contract with operators:
//!
//! * destination bucket: `<source-bucket>-resize`
//! * destination key: `resized-<source-key>`
//!
//! The destination bucket must be provisioned out of band, it is never created.
//!
//! # Examples
//!
//! Load the default configuration and thumbnail a single object:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_thumbnailer::error::Error> {
//! let config = aws_s3_thumbnailer::from_env().load().await;
//! let client = aws_s3_thumbnailer::Client::new(config);
//!
//! let output = client
//!     .thumbnail()
//!     .bucket("photos")
//!     .key("cat.png")
//!     .send()
//!     .await?;
//!
//! assert_eq!("photos-resize", output.destination().bucket());
//! # Ok(())
//! # }
//! ```
//!
//! See [`Client::handle_event`] for driving the pipeline directly from an S3 event notification.

/// Default maximum width and height (in pixels) of a generated thumbnail
pub(crate) const DEFAULT_MAX_DIMENSION: u32 = 50;

/// Error types emitted by `aws-s3-thumbnailer`
pub mod error;

/// Common types used by `aws-s3-thumbnailer`
pub mod types;

/// Thumbnailer client
pub mod client;

/// Thumbnailer operations
pub mod operation;

/// Thumbnailer configuration
pub mod config;

/// Decoding of S3 event notifications
pub mod event;

/// Aspect preserving image scaling
pub mod resize;

/// Object storage backends
pub mod storage;

pub use self::client::Client;
pub use self::config::Config;

use self::config::loader::ConfigLoader;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
