/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Derive an object key from a request path
pub mod resolve_key;

/// Fetch a single object and build its response
pub mod get_asset;
