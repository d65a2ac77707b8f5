/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_lambda_events::event::s3::S3Event;
use bytes::Bytes;
use image::{ImageFormat, RgbImage, RgbaImage};
use std::io::Cursor;

/// Encode a `width` x `height` gradient as `format`.
///
/// JPEG has no alpha channel so it is written from an RGB buffer, every other format from RGBA.
pub fn image_bytes(width: u32, height: u32, format: ImageFormat) -> Bytes {
    let mut buffer = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg => {
            let image = RgbImage::from_fn(width, height, |x, y| {
                image::Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, 90])
            });
            image.write_to(&mut buffer, format).unwrap();
        }
        _ => {
            let image = RgbaImage::from_fn(width, height, |x, y| {
                image::Rgba([(x * 7 % 256) as u8, (y * 13 % 256) as u8, 90, 255])
            });
            image.write_to(&mut buffer, format).unwrap();
        }
    }
    buffer.into_inner().into()
}

/// Encode a `width` x `height` PNG
pub fn png(width: u32, height: u32) -> Bytes {
    image_bytes(width, height, ImageFormat::Png)
}

/// Width and height of an encoded image
pub fn dimensions_of(data: &[u8]) -> (u32, u32) {
    let image = image::load_from_memory(data).unwrap();
    (image.width(), image.height())
}

/// A complete `ObjectCreated:Put` notification for `bucket` / `key`, exactly as S3 delivers it
/// to Lambda. `key` is used verbatim so it must already be in notification (encoded) form.
pub fn s3_put_event(bucket: &str, key: &str) -> S3Event {
    serde_json::from_value(serde_json::json!({
        "Records": [put_record(bucket, key)]
    }))
    .unwrap()
}

/// A notification carrying one record per `(bucket, key)` pair.
pub fn s3_put_event_with_records(objects: &[(&str, &str)]) -> S3Event {
    let records: Vec<_> = objects
        .iter()
        .map(|(bucket, key)| put_record(bucket, key))
        .collect();
    serde_json::from_value(serde_json::json!({ "Records": records })).unwrap()
}

fn put_record(bucket: &str, key: &str) -> serde_json::Value {
    serde_json::json!({
        "eventVersion": "2.1",
        "eventSource": "aws:s3",
        "awsRegion": "us-west-2",
        "eventTime": "2024-03-01T12:00:00.000Z",
        "eventName": "ObjectCreated:Put",
        "userIdentity": {
            "principalId": "EXAMPLE"
        },
        "requestParameters": {
            "sourceIPAddress": "127.0.0.1"
        },
        "responseElements": {
            "x-amz-request-id": "EXAMPLE123456789",
            "x-amz-id-2": "EXAMPLE123/5678abcdefghijklambdaisawesome/mnopqrstuvwxyzABCDEFGH"
        },
        "s3": {
            "s3SchemaVersion": "1.0",
            "configurationId": "thumbnail-trigger",
            "bucket": {
                "name": bucket,
                "ownerIdentity": {
                    "principalId": "EXAMPLE"
                },
                "arn": format!("arn:aws:s3:::{bucket}")
            },
            "object": {
                "key": key,
                "size": 1024,
                "eTag": "0123456789abcdef0123456789abcdef",
                "sequencer": "0A1B2C3D4E5F678901"
            }
        }
    })
}
