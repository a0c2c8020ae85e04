/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */

//! S3 static assets
//!
//! Serves objects from a single Amazon S3 bucket in response to path based requests
//! (Application Load Balancer or API Gateway events delivered to AWS Lambda).
//!
//! A request path such as `/static/images/logo.png` is mapped to the object key
//! `images/logo.png` by stripping the configured prefix. The object is read with a single
//! `GetObject` and returned base64 encoded. Every outcome is converted into a
//! [`ResponseEnvelope`](types::ResponseEnvelope):
//!
//! | outcome                      | status | body                  |
//! |------------------------------|--------|-----------------------|
//! | object found                 | 200    | base64 of the object  |
//! | path lacks the prefix        | 400    | `Invalid request`     |
//! | key or bucket does not exist | 404    | `Not Found: <detail>` |
//! | any other failure            | 500    | `ERROR: <detail>`     |
//!
//! Build one [`Client`] per execution environment and reuse it for every invocation.

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

/// Error types emitted by `s3-static-assets`
pub mod error;

/// Common types used by `s3-static-assets`
pub mod types;

/// Handler client (the per-environment backend handle)
pub mod client;

/// Handler configuration
pub mod config;

/// Handler operations
pub mod operation;

/// Invocation entry points
pub mod handler;

pub use self::client::Client;
pub use self::config::Config;
