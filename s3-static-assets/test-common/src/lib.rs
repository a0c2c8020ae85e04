/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::Region;
use aws_smithy_http_client::test_util::infallible_client_fn;
use aws_smithy_types::body::SdkBody;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// How a mock object answers `GetObject`
#[derive(Debug, Clone)]
enum Behavior {
    Contents {
        data: Bytes,
        content_type: Option<String>,
    },
    /// S3 error response with the given HTTP status and error code, e.g. `403 AccessDenied`
    ServiceError { status: u16, code: String },
}

fn error_body(code: &str, key: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <Error><Code>{code}</Code><Message>mock {code} for {key}</Message>\
         <Key>{key}</Key><RequestId>MOCKREQUESTID</RequestId></Error>"
    )
}

impl Behavior {
    fn http_response(&self, key: &str) -> http::Response<SdkBody> {
        match self {
            Behavior::Contents { data, content_type } => {
                let mut builder = http::Response::builder()
                    .status(200)
                    .header("Content-Length", data.len().to_string());
                if let Some(content_type) = content_type {
                    builder = builder.header("Content-Type", content_type.as_str());
                }
                builder.body(SdkBody::from(data.clone())).unwrap()
            }
            Behavior::ServiceError { status, code } => http::Response::builder()
                .status(*status)
                .header("Content-Type", "application/xml")
                .body(SdkBody::from(error_body(code, key)))
                .unwrap(),
        }
    }
}

/// Mock bucket with a fixed set of objects, served through a stubbed HTTP client.
///
/// Responses go through the SDK's regular deserialization, so error codes reach the
/// caller exactly as they would from S3. Any key that was not added answers
/// `404 NoSuchKey`.
#[derive(Debug, Clone)]
pub struct MockBucket {
    name: String,
    objects: Arc<HashMap<String, Behavior>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockBucket {
    /// Create a new `MockBucketBuilder`
    pub fn builder() -> MockBucketBuilder {
        MockBucketBuilder::default()
    }

    /// Name of the bucket the client expects requests for
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keys requested from this bucket so far, in order
    pub fn requested_keys(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Build an S3 client answering from this bucket. Retries are disabled so every
    /// operation maps to exactly one request.
    pub fn client(&self) -> aws_sdk_s3::Client {
        let bucket = self.clone();
        let http_client = infallible_client_fn(move |req: http::Request<SdkBody>| {
            let key = bucket.key_from_path(req.uri().path());
            bucket.requests.lock().unwrap().push(key.clone());
            match bucket.objects.get(&key) {
                Some(behavior) => behavior.http_response(&key),
                None => Behavior::ServiceError {
                    status: 404,
                    code: "NoSuchKey".to_owned(),
                }
                .http_response(&key),
            }
        });

        aws_sdk_s3::Client::from_conf(
            aws_sdk_s3::config::Config::builder()
                .http_client(http_client)
                .region(Region::from_static("us-east-1"))
                .retry_config(RetryConfig::disabled())
                .with_test_defaults()
                .build(),
        )
    }

    /// Object key from a virtual-hosted (`/key`) or path-style (`/bucket/key`) request path
    fn key_from_path(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = path
            .strip_prefix(self.name.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(path);
        path.to_owned()
    }
}

/// Builder for [`MockBucket`]
#[derive(Debug)]
pub struct MockBucketBuilder {
    name: String,
    objects: HashMap<String, Behavior>,
}

impl Default for MockBucketBuilder {
    fn default() -> Self {
        MockBucketBuilder {
            name: "test-bucket".to_owned(),
            objects: HashMap::new(),
        }
    }
}

impl MockBucketBuilder {
    /// Set the bucket name. Default is `test-bucket`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add an object with the given contents and content type
    pub fn object(
        mut self,
        key: impl Into<String>,
        data: impl Into<Bytes>,
        content_type: impl Into<String>,
    ) -> Self {
        self.objects.insert(
            key.into(),
            Behavior::Contents {
                data: data.into(),
                content_type: Some(content_type.into()),
            },
        );
        self
    }

    /// Add an object stored without a content type
    pub fn untyped_object(mut self, key: impl Into<String>, data: impl Into<Bytes>) -> Self {
        self.objects.insert(
            key.into(),
            Behavior::Contents {
                data: data.into(),
                content_type: None,
            },
        );
        self
    }

    /// Add a key whose `GetObject` fails with the given status and S3 error code
    pub fn key_with_error_code(
        mut self,
        key: impl Into<String>,
        status: u16,
        code: impl Into<String>,
    ) -> Self {
        self.objects.insert(
            key.into(),
            Behavior::ServiceError {
                status,
                code: code.into(),
            },
        );
        self
    }

    /// Add a key whose `GetObject` fails with `500 InternalError`
    pub fn key_with_internal_error(self, key: impl Into<String>) -> Self {
        self.key_with_error_code(key, 500, "InternalError")
    }

    /// Consume the builder and build a `MockBucket`
    pub fn build(self) -> MockBucket {
        MockBucket {
            name: self.name,
            objects: Arc::new(self.objects),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}
