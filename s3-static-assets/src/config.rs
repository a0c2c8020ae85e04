/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use crate::types::PathPrefix;

/// Load configuration from the execution environment
pub mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    bucket: String,
    path_prefix: PathPrefix,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The bucket every object is read from.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The prefix stripped from request paths to obtain an object key.
    pub fn path_prefix(&self) -> &PathPrefix {
        &self.path_prefix
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    bucket: Option<String>,
    path_prefix: Option<String>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Name of the bucket objects are served from. Required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the bucket name, or clear it with `None`.
    pub fn set_bucket(mut self, bucket: Option<String>) -> Self {
        self.bucket = bucket;
        self
    }

    /// The prefix stripped from request paths.
    ///
    /// Default is [PathPrefix::default] (`/static/`).
    pub fn path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = Some(prefix.into());
        self
    }

    /// Set the path prefix, or fall back to the default with `None`.
    pub fn set_path_prefix(mut self, prefix: Option<String>) -> Self {
        self.path_prefix = prefix;
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub(crate) fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    ///
    /// Fails with [`ErrorKind::ConfigurationError`](crate::error::ErrorKind::ConfigurationError)
    /// when the bucket is unset or empty, the prefix is empty, or no client was given.
    pub fn build(self) -> Result<Config, error::Error> {
        let bucket = match self.bucket {
            Some(bucket) if !bucket.trim().is_empty() => bucket,
            _ => return Err(error::configuration("bucket name must be set and non-empty")),
        };

        let path_prefix = match self.path_prefix {
            Some(prefix) => PathPrefix::new(prefix)?,
            None => PathPrefix::default(),
        };

        let client = self
            .client
            .ok_or_else(|| error::configuration("an S3 client must be set"))?;

        Ok(Config {
            bucket,
            path_prefix,
            client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::error::ErrorKind;
    use aws_sdk_s3::config::{BehaviorVersion, Region};

    fn s3_client() -> aws_sdk_s3::Client {
        let conf = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::from_static("us-east-1"))
            .build();
        aws_sdk_s3::Client::from_conf(conf)
    }

    #[test]
    fn test_defaults() {
        let config = Config::builder()
            .bucket("assets")
            .client(s3_client())
            .build()
            .unwrap();

        assert_eq!("assets", config.bucket());
        assert_eq!("/static/", config.path_prefix().as_str());
    }

    #[test]
    fn test_explicit_prefix() {
        let config = Config::builder()
            .bucket("assets")
            .path_prefix("/lambda/")
            .client(s3_client())
            .build()
            .unwrap();

        assert_eq!("/lambda/", config.path_prefix().as_str());
    }

    #[test]
    fn test_missing_bucket() {
        let err = Config::builder().client(s3_client()).build().unwrap_err();
        assert_eq!(&ErrorKind::ConfigurationError, err.kind());

        let err = Config::builder()
            .bucket("  ")
            .client(s3_client())
            .build()
            .unwrap_err();
        assert_eq!(&ErrorKind::ConfigurationError, err.kind());
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = Config::builder()
            .bucket("assets")
            .path_prefix("")
            .client(s3_client())
            .build()
            .unwrap_err();
        assert_eq!(&ErrorKind::ConfigurationError, err.kind());
    }

    #[test]
    fn test_missing_client() {
        let err = Config::builder().bucket("assets").build().unwrap_err();
        assert_eq!(&ErrorKind::ConfigurationError, err.kind());
    }
}
