/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::env;

use aws_config::retry::RetryConfig;

use crate::config::Builder;
use crate::{error, Config};

/// Environment variable holding the bucket name.
pub const BUCKET_NAME_ENV: &str = "BUCKET_NAME";

/// Legacy spelling of [`BUCKET_NAME_ENV`], consulted when the former is unset.
pub const S3_BUCKET_NAME_ENV: &str = "S3_BUCKET_NAME";

/// Environment variable holding the request path prefix to strip.
pub const PATH_PREFIX_ENV: &str = "LAMBDA_PATH";

/// Load handler [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    bucket_override: Option<String>,
    path_prefix_override: Option<String>,
}

impl ConfigLoader {
    /// Use this bucket instead of the one named by `BUCKET_NAME`.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket_override = Some(bucket.into());
        self
    }

    /// Use this prefix instead of the one named by `LAMBDA_PATH`.
    pub fn path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix_override = Some(prefix.into());
        self
    }

    /// Use an explicit S3 client rather than one built from the shared AWS configuration.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.builder = self.builder.client(client);
        self
    }

    /// Load the configuration
    ///
    /// If fields have been overridden on the loader, the override values will be used.
    /// Otherwise the bucket and prefix are read from the environment and the S3 client is
    /// built from [`aws_config::from_env`].
    pub async fn load(self) -> Result<Config, error::Error> {
        self.load_with(|name| env::var(name).ok()).await
    }

    async fn load_with(
        self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Config, error::Error> {
        let bucket = self.bucket_override.or_else(|| resolve_bucket(&lookup));
        let path_prefix = self
            .path_prefix_override
            .or_else(|| lookup(PATH_PREFIX_ENV));

        // Fail on a missing bucket before paying for credential resolution.
        if bucket.as_deref().map_or(true, |b| b.trim().is_empty()) {
            return Err(error::configuration(format!(
                "environment variable `{BUCKET_NAME_ENV}` must be set and non-empty"
            )));
        }

        let mut builder = self.builder;
        if !builder.has_client() {
            // A single attempt per request; the handler never retries a read.
            let shared_config = aws_config::from_env()
                .retry_config(RetryConfig::disabled())
                .load()
                .await;
            builder = builder.client(aws_sdk_s3::Client::new(&shared_config));
        }

        builder
            .set_bucket(bucket)
            .set_path_prefix(path_prefix)
            .build()
    }
}

fn resolve_bucket(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup(BUCKET_NAME_ENV)
        .filter(|b| !b.is_empty())
        .or_else(|| lookup(S3_BUCKET_NAME_ENV))
}
