//! Request parameter validation.
//!
//! Checks run in a fixed order (URI, orientation, page size, zoom) and stop at
//! the first failure, before any cryptographic work. Margin is deliberately
//! left unvalidated; the deployed service accepts it as-is.

use crate::error::PdfBucketError;
use crate::request::ConversionRequest;
use regex::Regex;
use std::sync::LazyLock;

/// Accepted source URI shape: http/https scheme, a dotted host, and an
/// optional path/query drawn from a restricted character set. Unanchored,
/// matching the service's own check.
static URI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(http|https)://[\w\-_]+(\.[\w\-_]+)+([\w\-.,@?^=%&:/~+#]*[\w\-@?^=%&/~+#])?")
        .expect("URI pattern compiles")
});

const ORIENTATIONS: [&str; 2] = ["portrait", "landscape"];
const PAGE_SIZES: [&str; 2] = ["a4", "letter"];

/// Validate a request, returning the first failure in the fixed order.
pub fn validate(request: &ConversionRequest) -> Result<(), PdfBucketError> {
    if !URI_PATTERN.is_match(&request.source_uri) {
        return Err(PdfBucketError::InvalidUri(request.source_uri.clone()));
    }

    if !ORIENTATIONS.contains(&request.orientation.to_lowercase().as_str()) {
        return Err(PdfBucketError::InvalidOrientation(
            request.orientation.clone(),
        ));
    }

    if !PAGE_SIZES.contains(&request.page_size.to_lowercase().as_str()) {
        return Err(PdfBucketError::InvalidPageSize(request.page_size.clone()));
    }

    let zoom: f64 = request
        .zoom
        .trim()
        .parse()
        .map_err(|_| PdfBucketError::InvalidZoom(request.zoom.clone()))?;
    if !(0.0..=1.0).contains(&zoom) {
        return Err(PdfBucketError::InvalidZoom(request.zoom.clone()));
    }

    Ok(())
}
