/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use crate::types::PathPrefix;

/// Derive an object key from a request path.
///
/// The path is split on the first occurrence of `prefix` and everything after it is the key,
/// unchanged. Fails with [`ErrorKind::MalformedPath`](crate::error::ErrorKind::MalformedPath)
/// when the prefix does not occur or nothing follows it.
pub fn resolve_key(path: &str, prefix: &PathPrefix) -> Result<String, error::Error> {
    let prefix = prefix.as_str();
    match path.split_once(prefix) {
        Some((_, key)) if !key.is_empty() => Ok(key.to_owned()),
        Some(_) => Err(error::malformed_path(format!(
            "path `{path}` has no key after prefix `{prefix}`"
        ))),
        None => Err(error::malformed_path(format!(
            "path `{path}` does not contain prefix `{prefix}`"
        ))),
    }
}
