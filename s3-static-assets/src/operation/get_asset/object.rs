/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::get_object::GetObjectOutput;
use bytes::Bytes;

use crate::error;

/// An object read from the bucket: its contents plus the metadata copied into the response.
///
/// Only lives for a single fetch-and-respond cycle.
#[derive(Debug, Clone, Default)]
pub(crate) struct FetchedObject {
    pub(crate) body: Bytes,
    pub(crate) content_type: Option<String>,
    pub(crate) content_length: Option<i64>,
}

impl FetchedObject {
    /// Drain the body of a `GetObject` response.
    ///
    /// A body stream that fails part way is a backend failure, not a missing object.
    pub(crate) async fn from_output(output: GetObjectOutput) -> Result<Self, error::Error> {
        let content_type = output.content_type;
        let content_length = output.content_length;
        let body = output.body.collect().await?.into_bytes();

        Ok(FetchedObject {
            body,
            content_type,
            content_length,
        })
    }
}
