/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::{PathPrefix, Request, ResponseEnvelope};
use crate::Config;
use std::sync::Arc;

/// Handler client for serving objects out of a single Amazon S3 bucket.
///
/// A `Client` is the backend handle of an execution environment: build it once at startup
/// and clone it into every invocation. Clones share the same immutable handle.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to serve a request: the S3 client, bucket and path prefix.
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    pub(crate) fn s3(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }

    pub(crate) fn bucket(&self) -> &str {
        self.config.bucket()
    }
}

impl Client {
    /// Creates a new client from a handler config.
    pub fn new(config: Config) -> Client {
        tracing::debug!(
            bucket = config.bucket(),
            prefix = config.path_prefix().as_str(),
            "backend handle created"
        );
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// The bucket objects are served from
    pub fn bucket(&self) -> &str {
        self.handle.bucket()
    }

    /// The prefix stripped from request paths
    pub fn path_prefix(&self) -> &PathPrefix {
        self.handle.config.path_prefix()
    }

    /// Serve a single request.
    ///
    /// Never fails: every outcome, including a malformed path or a backend fault, is
    /// converted into a [`ResponseEnvelope`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use s3_static_assets::types::Request;
    ///
    /// async fn serve(client: &s3_static_assets::Client) {
    ///     let response = client.handle(&Request::new("/static/logo.png")).await;
    ///     println!("{}", response.status_code());
    /// }
    /// ```
    pub async fn handle(&self, request: &Request) -> ResponseEnvelope {
        crate::handler::handle(self, request).await
    }

    /// Fetch a single object by key and build its response.
    ///
    /// The key is used as-is; no prefix is stripped.
    pub async fn get_asset(&self, key: &str) -> ResponseEnvelope {
        crate::operation::get_asset::get_asset(&self.handle, key).await
    }
}
