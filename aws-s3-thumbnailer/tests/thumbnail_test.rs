/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_s3_thumbnailer::error::ErrorKind;
use aws_s3_thumbnailer::operation::thumbnail::ThumbnailInput;
use aws_s3_thumbnailer::storage::{InMemoryStore, ObjectStore, StoredObject};
use aws_s3_thumbnailer::types::{Dimensions, NamingConvention, ObjectLocation};
use aws_s3_thumbnailer::{Client, Config};
use bytes::Bytes;
use image::ImageFormat;
use test_common::{dimensions_of, image_bytes, png, s3_put_event, s3_put_event_with_records};

/// Create a store with the `photos` source bucket and its `photos-resize` destination.
async fn provisioned_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    store.create_bucket("photos").await;
    store.create_bucket("photos-resize").await;
    store
}

fn test_client(store: &Arc<InMemoryStore>) -> Client {
    let config = Config::builder().store(store.clone()).build();
    Client::new(config)
}

async fn put_source(store: &InMemoryStore, key: &str, body: Bytes, content_type: Option<&str>) {
    store
        .put_object(
            &ObjectLocation::new("photos", key),
            StoredObject::new(body, content_type.map(str::to_owned)),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_event_to_thumbnail() {
    let store = provisioned_store().await;
    put_source(&store, "cat.png", png(200, 100), Some("image/png")).await;
    let client = test_client(&store);

    let output = client
        .handle_event(&s3_put_event("photos", "cat.png"))
        .await
        .unwrap();

    let destination = ObjectLocation::new("photos-resize", "resized-cat.png");
    assert_eq!(&destination, output.destination());
    assert_eq!(Dimensions::new(200, 100), output.source_dimensions());
    assert_eq!(Dimensions::new(50, 25), output.dimensions());
    assert_eq!("png", output.format().as_str());

    let thumbnail = store.object(&destination).await.expect("thumbnail written");
    assert_eq!((50, 25), dimensions_of(thumbnail.body()));
    assert_eq!(
        ImageFormat::Png,
        image::guess_format(thumbnail.body()).unwrap()
    );
}

#[tokio::test]
async fn test_portrait_jpeg() {
    let store = provisioned_store().await;
    put_source(
        &store,
        "dog.JPG",
        image_bytes(40, 80, ImageFormat::Jpeg),
        Some("image/jpeg"),
    )
    .await;
    let client = test_client(&store);

    let output = client
        .handle_event(&s3_put_event("photos", "dog.JPG"))
        .await
        .unwrap();

    assert_eq!(Dimensions::new(25, 50), output.dimensions());
    let thumbnail = store.object(output.destination()).await.unwrap();
    assert_eq!(
        ImageFormat::Jpeg,
        image::guess_format(thumbnail.body()).unwrap()
    );
}

#[tokio::test]
async fn test_encoded_key_is_decoded() {
    let store = provisioned_store().await;
    put_source(&store, "summer/a b c.png", png(64, 64), Some("image/png")).await;
    let client = test_client(&store);

    let output = client
        .handle_event(&s3_put_event("photos", "summer/a+b%20c.png"))
        .await
        .unwrap();

    assert_eq!("summer/a b c.png", output.source().key());
    assert_eq!("resized-summer/a b c.png", output.destination().key());
    assert!(store.object(output.destination()).await.is_some());
}

#[tokio::test]
async fn test_non_ascii_key() {
    let store = provisioned_store().await;
    put_source(&store, "été.gif", image_bytes(30, 10, ImageFormat::Gif), None).await;
    let client = test_client(&store);

    let output = client
        .handle_event(&s3_put_event("photos", "%C3%A9t%C3%A9.gif"))
        .await
        .unwrap();

    assert_eq!("resized-été.gif", output.destination().key());
    // small sources are scaled up to the bounding box
    assert_eq!(Dimensions::new(50, 17), output.dimensions());
}

#[tokio::test]
async fn test_send_with_input_builder() {
    let store = provisioned_store().await;
    put_source(&store, "cat.png", png(100, 50), Some("image/png")).await;
    let client = test_client(&store);

    let output = ThumbnailInput::builder()
        .bucket("photos")
        .key("cat.png")
        .send_with(&client)
        .await
        .unwrap();

    assert_eq!(Dimensions::new(50, 25), output.dimensions());
    assert!(store.object(output.destination()).await.is_some());
}

#[tokio::test]
async fn test_content_type_is_copied_from_source() {
    let store = provisioned_store().await;
    // deliberately not an image content type, it is copied as-is
    put_source(
        &store,
        "odd.png",
        png(10, 20),
        Some("application/octet-stream"),
    )
    .await;
    put_source(&store, "untyped.png", png(10, 20), None).await;
    let client = test_client(&store);

    let output = client
        .thumbnail()
        .bucket("photos")
        .key("odd.png")
        .send()
        .await
        .unwrap();
    assert_eq!(Some("application/octet-stream"), output.content_type());
    let thumbnail = store.object(output.destination()).await.unwrap();
    assert_eq!(Some("application/octet-stream"), thumbnail.content_type());

    let output = client
        .thumbnail()
        .bucket("photos")
        .key("untyped.png")
        .send()
        .await
        .unwrap();
    let thumbnail = store.object(output.destination()).await.unwrap();
    assert_eq!(None, thumbnail.content_type());
}

#[tokio::test]
async fn test_decode_failure_writes_nothing() {
    let store = provisioned_store().await;
    put_source(
        &store,
        "broken.png",
        Bytes::from_static(b"this is not an image"),
        Some("image/png"),
    )
    .await;
    let client = test_client(&store);

    let err = client
        .handle_event(&s3_put_event("photos", "broken.png"))
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::DecodeFailed, err.kind());
    let destination = ObjectLocation::new("photos-resize", "resized-broken.png");
    assert!(store.object(&destination).await.is_none());
    // only the source fixture was ever written
    assert_eq!(1, store.writes());
}

#[tokio::test]
async fn test_unrecognized_format() {
    let store = provisioned_store().await;
    let client = test_client(&store);

    let err = client
        .handle_event(&s3_put_event("photos", "Makefile"))
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::UnrecognizedFormat, err.kind());
    assert_eq!(0, store.writes());
}

#[tokio::test]
async fn test_missing_source_object() {
    let store = provisioned_store().await;
    let client = test_client(&store);

    let err = client
        .handle_event(&s3_put_event("photos", "gone.png"))
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::FetchFailed, err.kind());
}

#[tokio::test]
async fn test_unprovisioned_destination_bucket() {
    let store = Arc::new(InMemoryStore::new());
    store.create_bucket("photos").await;
    put_source(&store, "cat.png", png(100, 100), Some("image/png")).await;
    let client = test_client(&store);

    let err = client
        .handle_event(&s3_put_event("photos", "cat.png"))
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::UploadFailed, err.kind());
}

#[tokio::test]
async fn test_denied_destination_bucket() {
    let store = provisioned_store().await;
    put_source(&store, "cat.png", png(100, 100), Some("image/png")).await;
    store.deny_access("photos-resize").await;
    let client = test_client(&store);

    let err = client
        .thumbnail()
        .bucket("photos")
        .key("cat.png")
        .send()
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::UploadFailed, err.kind());
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let store = provisioned_store().await;
    put_source(&store, "cat.png", png(300, 120), Some("image/png")).await;
    let client = test_client(&store);
    let event = s3_put_event("photos", "cat.png");

    let first = client.handle_event(&event).await.unwrap();
    let first_body = store.object(first.destination()).await.unwrap();

    let second = client.handle_event(&event).await.unwrap();
    let second_body = store.object(second.destination()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first_body, second_body);
}

#[tokio::test]
async fn test_only_first_record_is_processed() {
    let store = provisioned_store().await;
    put_source(&store, "one.png", png(20, 20), Some("image/png")).await;
    put_source(&store, "two.png", png(20, 20), Some("image/png")).await;
    let client = test_client(&store);

    let event = s3_put_event_with_records(&[("photos", "one.png"), ("photos", "two.png")]);
    client.handle_event(&event).await.unwrap();

    assert!(store
        .object(&ObjectLocation::new("photos-resize", "resized-one.png"))
        .await
        .is_some());
    assert!(store
        .object(&ObjectLocation::new("photos-resize", "resized-two.png"))
        .await
        .is_none());
}

#[tokio::test]
async fn test_empty_event() {
    let store = provisioned_store().await;
    let client = test_client(&store);

    let err = client
        .handle_event(&s3_put_event_with_records(&[]))
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::InvalidEvent, err.kind());
}

#[tokio::test]
async fn test_custom_bounding_box_and_naming() {
    let store = Arc::new(InMemoryStore::new());
    store.create_bucket("photos").await;
    store.create_bucket("photos-thumbs").await;
    put_source(&store, "wide.png", png(400, 100), Some("image/png")).await;

    let config = Config::builder()
        .store(store.clone())
        .bounding_box(128, 128)
        .naming(NamingConvention::new("-thumbs", "small/"))
        .build();
    let client = Client::new(config);

    let output = client
        .thumbnail()
        .bucket("photos")
        .key("wide.png")
        .send()
        .await
        .unwrap();

    assert_eq!(
        &ObjectLocation::new("photos-thumbs", "small/wide.png"),
        output.destination()
    );
    assert_eq!(Dimensions::new(128, 32), output.dimensions());
}
