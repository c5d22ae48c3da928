//
//  gqlx
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response normalization: header merge and body parsing.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::error::ExecuteError;
use super::transport::RawResponse;
use crate::definitions::Header;

/// A response reduced to its merged headers and parsed JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResponse {
    /// Merged headers, one entry per name, sorted by name.
    pub headers: Vec<Header>,
    /// The parsed body.
    pub data: Map<String, Value>,
}

/// Merges the response's headers and parses its body.
///
/// Response headers and content headers are each collapsed to one value per name (repeated
/// values joined with `;`). On a name present in both, the content header wins.
///
/// The status code is ignored.
///
/// # Errors
///
/// Returns [`ExecuteError::InvalidBody`] if the body is not a single JSON object.
pub fn normalize(response: RawResponse) -> Result<NormalizedResponse, ExecuteError> {
    let mut merged = collect_headers(&response.headers);
    merged.extend(collect_headers(&response.content_headers));

    let headers = merged
        .into_iter()
        .map(|(name, value)| Header { name, value })
        .collect();

    let data: Map<String, Value> = serde_json::from_str(&response.body)?;

    Ok(NormalizedResponse { headers, data })
}

fn collect_headers(headers: &[Header]) -> BTreeMap<String, String> {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    for header in headers {
        map.entry(header.name.clone())
            .and_modify(|existing| {
                existing.push(';');
                existing.push_str(&header.value);
            })
            .or_insert_with(|| header.value.clone());
    }
    map
}
