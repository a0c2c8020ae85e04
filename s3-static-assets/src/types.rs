/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error;

/// Default prefix stripped from request paths.
pub const DEFAULT_PATH_PREFIX: &str = "/static/";

/// The prefix separating the routing part of a request path from the object key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrefix(String);

impl PathPrefix {
    /// Create a prefix. An empty prefix would match every path and is rejected.
    pub fn new(prefix: impl Into<String>) -> Result<Self, error::Error> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(error::configuration("path prefix must be non-empty"));
        }
        Ok(PathPrefix(prefix))
    }

    /// The prefix as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PathPrefix {
    fn default() -> Self {
        PathPrefix(DEFAULT_PATH_PREFIX.to_owned())
    }
}

/// Inbound request. Only the path is consumed; all other event fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Request {
    /// Request path, e.g. `/static/images/logo.png`
    pub path: String,
}

impl Request {
    /// Create a request for the given path
    pub fn new(path: impl Into<String>) -> Self {
        Request { path: path.into() }
    }
}

/// The structured result returned for every invocation.
///
/// Error responses only carry a status code and body; `headers` and `isBase64Encoded`
/// are omitted from the serialized form when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_base64_encoded: Option<bool>,
    body: String,
}

impl ResponseEnvelope {
    /// A successful response carrying a base64 encoded body.
    pub(crate) fn ok_base64(headers: BTreeMap<String, String>, body: String) -> Self {
        ResponseEnvelope {
            status_code: 200,
            headers: Some(headers),
            is_base64_encoded: Some(true),
            body,
        }
    }

    /// A degenerate response with only a status code and body set.
    pub(crate) fn status(status_code: u16, body: impl Into<String>) -> Self {
        ResponseEnvelope {
            status_code,
            headers: None,
            is_base64_encoded: None,
            body: body.into(),
        }
    }

    /// HTTP status code
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Response headers, set only on success.
    pub fn headers(&self) -> Option<&BTreeMap<String, String>> {
        self.headers.as_ref()
    }

    /// Look up a single response header by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref()?.get(name).map(String::as_str)
    }

    /// Whether the body is base64 encoded, set only on success.
    pub fn is_base64_encoded(&self) -> Option<bool> {
        self.is_base64_encoded
    }

    /// Response body
    pub fn body(&self) -> &str {
        &self.body
    }
}
