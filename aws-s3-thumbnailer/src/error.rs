/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// Every error is terminal for the invocation that produced it. Nothing is retried internally,
/// the caller (usually the Lambda host) owns any retry or dead-letter policy.
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of thumbnailing errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// The event notification could not be decoded into an object location
    InvalidEvent,

    /// The object key has no extension to infer an image format from
    UnrecognizedFormat,

    /// The source object could not be retrieved
    FetchFailed,

    /// The source object could not be decoded as an image
    DecodeFailed,

    /// The resized image could not be encoded
    EncodeFailed,

    /// The thumbnail could not be written to the destination
    UploadFailed,

    /// Some kind of internal runtime issue (e.g. task failure)
    RuntimeError,
}

impl Error {
    /// Creates a new thumbnailer [`Error`] from a known kind of error as well as an arbitrary
    /// error source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::InvalidEvent => write!(f, "invalid event notification"),
            ErrorKind::UnrecognizedFormat => write!(f, "unrecognized image format"),
            ErrorKind::FetchFailed => write!(f, "failed to fetch source object"),
            ErrorKind::DecodeFailed => write!(f, "failed to decode image"),
            ErrorKind::EncodeFailed => write!(f, "failed to encode image"),
            ErrorKind::UploadFailed => write!(f, "failed to upload thumbnail"),
            ErrorKind::RuntimeError => write!(f, "runtime error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::new(ErrorKind::RuntimeError, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn invalid_event<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InvalidEvent, err)
}

pub(crate) fn from_kind<E>(kind: ErrorKind) -> impl FnOnce(E) -> Error
where
    E: Into<BoxError>,
{
    |err| Error::new(kind, err)
}
