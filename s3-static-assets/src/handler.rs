/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use lambda_runtime::LambdaEvent;
use tracing::Instrument;

use crate::client::Client;
use crate::operation::get_asset::get_asset;
use crate::operation::resolve_key::resolve_key;
use crate::types::{Request, ResponseEnvelope};

/// Body returned when no object key can be derived from the request path
pub const INVALID_REQUEST_BODY: &str = "Invalid request";

/// Serve one request: resolve the key from the path, then fetch and respond.
///
/// A path without the configured prefix gets a 400 without any request to S3.
pub async fn handle(client: &Client, request: &Request) -> ResponseEnvelope {
    tracing::debug!(path = %request.path, "event path");

    let key = match resolve_key(&request.path, client.path_prefix()) {
        Ok(key) => key,
        Err(err) => {
            tracing::error!(
                path = %request.path,
                bucket = client.bucket(),
                error = %err.detail(),
                "invalid request path"
            );
            return ResponseEnvelope::status(400, INVALID_REQUEST_BODY);
        }
    };

    get_asset(&client.handle, &key).await
}

/// [`lambda_runtime`] adapter around [`handle`].
///
/// Always returns `Ok`; failures are reported through the response status.
pub async fn handle_event(
    client: &Client,
    event: LambdaEvent<Request>,
) -> Result<ResponseEnvelope, lambda_runtime::Error> {
    let (request, context) = event.into_parts();
    let response = handle(client, &request)
        .instrument(tracing::info_span!("invocation", request_id = %context.request_id))
        .await;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::types::Request;
    use aws_sdk_s3::operation::get_object::GetObjectOutput;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use aws_smithy_types::byte_stream::ByteStream;

    #[tokio::test]
    async fn test_malformed_path_skips_fetch() {
        let get_obj_rule = mock!(aws_sdk_s3::Client::get_object)
            .then_output(|| GetObjectOutput::builder().body(ByteStream::from_static(b"")).build());
        let s3 = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&get_obj_rule]);
        let config = crate::Config::builder()
            .bucket("test-bucket")
            .client(s3)
            .build()
            .unwrap();
        let client = crate::Client::new(config);

        for path in ["/other/sample.txt", "/static/"] {
            let resp = handle(&client, &Request::new(path)).await;
            assert_eq!(400, resp.status_code());
            assert_eq!("Invalid request", resp.body());
            assert!(resp.headers().is_none());
        }
        assert_eq!(0, get_obj_rule.num_calls());
    }
}
