/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! AWS Lambda entry point.
//!
//! Subscribes to S3 `ObjectCreated` notifications of a source bucket and writes a thumbnail of
//! every new image to `<bucket>-resize`. Log verbosity is controlled with `RUST_LOG`.

use aws_lambda_events::event::s3::S3Event;
use aws_s3_thumbnailer::Client;
use aws_smithy_types::error::display::DisplayErrorContext;
use lambda_runtime::{service_fn, LambdaEvent};
use tracing::Instrument;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

async fn handle(client: &Client, event: LambdaEvent<S3Event>) -> Result<(), BoxError> {
    let request_id = event.context.request_id.clone();
    let span = tracing::info_span!("invocation", request_id = %request_id);

    match client.handle_event(&event.payload).instrument(span).await {
        Ok(output) => {
            tracing::debug!(
                "thumbnail {} ({} bytes) written",
                output.destination(),
                output.size()
            );
            Ok(())
        }
        Err(err) => {
            tracing::error!("thumbnail failed: {}", DisplayErrorContext(&err));
            Err(err.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .init();

    let config = aws_s3_thumbnailer::from_env().load().await;
    let client = Client::new(config);
    let client = &client;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<S3Event>| async move {
        handle(client, event).await
    }))
    .await
}
