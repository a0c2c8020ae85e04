/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::BTreeMap;

use base64::engine::general_purpose;
use base64::Engine;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::{self, ErrorKind};
use crate::types::ResponseEnvelope;

mod object;
use object::FetchedObject;

/// Prefix of the body returned when the key does not exist
pub const NOT_FOUND_PREFIX: &str = "Not Found: ";

/// Prefix of the body returned for any other failure
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Read `key` from the configured bucket and build the response for it.
///
/// Exactly one `GetObject` request is sent. Every failure is converted into a response:
/// a missing key becomes a 404, anything else a 500.
pub(crate) async fn get_asset(handle: &Handle, key: &str) -> ResponseEnvelope {
    let bucket = handle.bucket();
    let response = match fetch(handle, key)
        .instrument(tracing::debug_span!("send-get-object", key, bucket))
        .await
    {
        Ok(object) => {
            tracing::info!(
                key,
                bucket,
                outcome = "ok",
                size = object.body.len(),
                "got object from bucket"
            );
            success(object)
        }
        Err(err) => match err.kind() {
            ErrorKind::ObjectNotFound => {
                let detail = err.detail();
                tracing::error!(key, bucket, outcome = "not_found", error = %detail, "object not found");
                ResponseEnvelope::status(404, format!("{NOT_FOUND_PREFIX}{detail}"))
            }
            ErrorKind::BackendFailure | ErrorKind::MalformedPath | ErrorKind::ConfigurationError => {
                let detail = err.detail();
                tracing::error!(key, bucket, outcome = "error", error = %detail, "failed to get object");
                ResponseEnvelope::status(500, format!("{ERROR_PREFIX}{detail}"))
            }
        },
    };

    tracing::debug!(status = response.status_code(), "returning response");
    response
}

async fn fetch(handle: &Handle, key: &str) -> Result<FetchedObject, error::Error> {
    let output = handle
        .s3()
        .get_object()
        .bucket(handle.bucket())
        .key(key)
        .send()
        .await?;

    FetchedObject::from_output(output).await
}

fn success(object: FetchedObject) -> ResponseEnvelope {
    let mut headers = BTreeMap::new();
    if let Some(content_type) = object.content_type {
        headers.insert("Content-Type".to_owned(), content_type);
    }
    if let Some(content_length) = object.content_length {
        headers.insert("Content-Length".to_owned(), content_length.to_string());
    }
    headers.insert("Access-Control-Allow-Origin".to_owned(), "*".to_owned());
    headers.insert("Cache-Control".to_owned(), "no-store".to_owned());

    let body = general_purpose::STANDARD.encode(&object.body);
    ResponseEnvelope::ok_base64(headers, body)
}
