//! Plaintext-mode request signing.
//!
//! The service recomputes the same digest server-side to authenticate a
//! request that carries the source URI in the clear; the secret itself never
//! travels on the wire.

use crate::request::ConversionRequest;
use sha1::{Digest, Sha1};

/// SHA-1 over `api_key,uri,orientation,page_size,margin,zoom` (comma-joined,
/// each value exactly as given) with the base64 secret text appended directly
/// after the last field. Returned as lowercase hex.
///
/// Deterministic by construction: identical inputs always yield the same
/// digest.
pub fn sign(request: &ConversionRequest, api_key: &str, api_secret: &str) -> String {
    let params = [
        api_key,
        request.source_uri.as_str(),
        request.orientation.as_str(),
        request.page_size.as_str(),
        request.margin.as_str(),
        request.zoom.as_str(),
    ]
    .join(",");

    let mut hasher = Sha1::new();
    hasher.update(params.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
