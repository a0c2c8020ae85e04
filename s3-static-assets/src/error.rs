/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`Error::detail`] or [`aws_smithy_types::error::display::DisplayErrorContext`] to
/// display the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of handler errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The request path does not carry the configured prefix, or nothing follows it.
    MalformedPath,

    /// The object store reported that the key (or bucket) does not exist.
    ObjectNotFound,

    /// Any other object store or infrastructure failure (permissions, transport, body stream).
    BackendFailure,

    /// Required configuration is missing or invalid. Fatal at startup.
    ConfigurationError,
}

impl Error {
    /// Creates a new handler [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
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

    /// The underlying cause rendered with its full source chain.
    pub fn detail(&self) -> String {
        DisplayErrorContext(self.source.as_ref()).to_string()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::MalformedPath => write!(f, "malformed request path"),
            ErrorKind::ObjectNotFound => write!(f, "object not found"),
            ErrorKind::BackendFailure => write!(f, "object store failure"),
            ErrorKind::ConfigurationError => write!(f, "invalid configuration"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::BackendFailure, value)
    }
}

pub(crate) fn malformed_path<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::MalformedPath, err)
}

pub(crate) fn configuration<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::ConfigurationError, err)
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        let kind = match value.code() {
            Some("NotFound" | "NoSuchKey" | "NoSuchBucket") => ErrorKind::ObjectNotFound,
            _ => ErrorKind::BackendFailure,
        };

        Error::new(kind, value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use aws_sdk_s3::error::SdkError;
    use aws_sdk_s3::operation::get_object::GetObjectError;
    use aws_sdk_s3::types::error::NoSuchKey;
    use aws_smithy_types::error::ErrorMetadata;

    fn service_error(err: GetObjectError) -> Error {
        let raw = aws_smithy_runtime_api::http::Response::new(
            aws_smithy_runtime_api::http::StatusCode::try_from(404).unwrap(),
            aws_smithy_types::body::SdkBody::empty(),
        );
        SdkError::service_error(err, raw).into()
    }

    #[test]
    fn test_no_such_key_is_not_found() {
        // as deserialized from a `404 NoSuchKey` response, the code travels in the metadata
        let no_such_key = NoSuchKey::builder()
            .message("The specified key does not exist.")
            .meta(ErrorMetadata::builder().code("NoSuchKey").build())
            .build();
        let err = service_error(GetObjectError::NoSuchKey(no_such_key));
        assert_eq!(&ErrorKind::ObjectNotFound, err.kind());
        assert!(err.detail().contains("NoSuchKey"), "{}", err.detail());
    }

    #[test]
    fn test_generic_codes_classified() {
        let err = service_error(GetObjectError::generic(
            ErrorMetadata::builder().code("NoSuchBucket").build(),
        ));
        assert_eq!(&ErrorKind::ObjectNotFound, err.kind());

        let err = service_error(GetObjectError::generic(
            ErrorMetadata::builder()
                .code("AccessDenied")
                .message("Access Denied")
                .build(),
        ));
        assert_eq!(&ErrorKind::BackendFailure, err.kind());
        assert!(err.detail().contains("AccessDenied"), "{}", err.detail());
    }

    #[test]
    fn test_detail_includes_source() {
        let err = super::malformed_path("path `/other/x` missing prefix `/static/`");
        assert_eq!("malformed request path", err.to_string());
        assert!(err.detail().contains("/other/x"));
    }
}
