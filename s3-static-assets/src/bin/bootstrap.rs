/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::env;

use aws_sdk_s3::error::DisplayErrorContext;
use lambda_runtime::{service_fn, LambdaEvent};
use s3_static_assets::config::loader::ConfigLoader;
use s3_static_assets::types::Request;
use s3_static_assets::Client;
use tracing_subscriber::EnvFilter;

const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
const DEFAULT_LOG_LEVEL: &str = "info";

fn init_tracing() {
    // RUST_LOG wins when set, otherwise LOG_LEVEL, otherwise info.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new(env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into()))
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    init_tracing();

    // Built once per execution environment and shared by every invocation it serves.
    let config = match ConfigLoader::default().load().await {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %DisplayErrorContext(&err), "failed to initialize");
            return Err(err.into());
        }
    };
    let client = Client::new(config);

    lambda_runtime::run(service_fn(|event: LambdaEvent<Request>| {
        let client = client.clone();
        async move { s3_static_assets::handler::handle_event(&client, event).await }
    }))
    .await
}
