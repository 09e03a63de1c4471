//! Conversion request parameters.

/// Parameters for a single conversion request.
///
/// Values are carried in the caller's textual form: the signature and the
/// emitted URL use them exactly as given (a `page_size` of `"A4"` stays
/// `A4` on the wire). Validation happens in [`crate::validate`], not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Source URL with the HTML content; http or https.
    pub source_uri: String,
    /// `portrait` or `landscape`, case-insensitive.
    pub orientation: String,
    /// `a4` or `letter`, case-insensitive.
    pub page_size: String,
    /// Page margin, e.g. `"0px"`. Passed through unvalidated.
    pub margin: String,
    /// Zoom factor as text, interpreted as a float in `[0.0, 1.0]`.
    pub zoom: String,
}

impl ConversionRequest {
    pub fn new(
        source_uri: impl Into<String>,
        orientation: impl Into<String>,
        page_size: impl Into<String>,
        margin: impl Into<String>,
        zoom: impl Into<String>,
    ) -> Self {
        Self {
            source_uri: source_uri.into(),
            orientation: orientation.into(),
            page_size: page_size.into(),
            margin: margin.into(),
            zoom: zoom.into(),
        }
    }
}
