//! The client façade: one set of credentials plus the two URL-generation
//! operations.

use crate::config::Credentials;
use crate::encrypt;
use crate::error::PdfBucketError;
use crate::query;
use crate::request::ConversionRequest;
use crate::sign;
use crate::validate;
use tracing::debug;

/// Handle on one set of API credentials.
///
/// Immutable after construction. Every operation is a pure function of the
/// request plus these credentials (the IV draw aside), so one instance can be
/// shared across threads without coordination.
#[derive(Debug, Clone)]
pub struct PdfBucket {
    api_key: String,
    api_secret: String,
    api_host: String,
}

impl PdfBucket {
    /// `api_secret` is base64 text (a 256-bit key once decoded); `api_host`
    /// is a bare hostname such as `api.pdfbucket.io`, no scheme.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        api_host: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_host: api_host.into(),
        }
    }

    pub fn from_credentials(credentials: Credentials) -> Self {
        Self::new(
            credentials.api_key,
            credentials.api_secret,
            credentials.api_host,
        )
    }

    /// Conversion URL with the source URI encrypted (confidential mode).
    ///
    /// Validation runs first; no randomness is consumed for an invalid
    /// request. The `encrypted_uri` parameter differs between calls even for
    /// identical requests, since each call draws a fresh IV.
    pub fn generate_url(&self, request: &ConversionRequest) -> Result<String, PdfBucketError> {
        validate::validate(request)?;
        let encrypted = encrypt::encrypt(&request.source_uri, &self.api_secret)?;
        debug!(host = %self.api_host, "built encrypted conversion url");
        Ok(self.build(request, &[("encrypted_uri", encrypted.as_str())]))
    }

    /// Conversion URL with the source URI in the clear, integrity-protected
    /// by a signature (plaintext mode).
    pub fn generate_plain_url(
        &self,
        request: &ConversionRequest,
    ) -> Result<String, PdfBucketError> {
        validate::validate(request)?;
        let signature = self.sign(request);
        debug!(host = %self.api_host, "built plain conversion url");
        Ok(self.build(
            request,
            &[
                ("uri", request.source_uri.as_str()),
                ("signature", signature.as_str()),
            ],
        ))
    }

    /// Digest binding all request parameters to the secret; see [`sign::sign`].
    pub fn sign(&self, request: &ConversionRequest) -> String {
        sign::sign(request, &self.api_key, &self.api_secret)
    }

    /// Encrypt a source URI under the account key; see [`encrypt::encrypt`].
    pub fn encrypt(&self, source_uri: &str) -> Result<String, PdfBucketError> {
        encrypt::encrypt(source_uri, &self.api_secret)
    }

    fn build(&self, request: &ConversionRequest, extra: &[(&str, &str)]) -> String {
        let base = [
            ("api_key", self.api_key.as_str()),
            ("orientation", request.orientation.as_str()),
            ("page_size", request.page_size.as_str()),
            ("margin", request.margin.as_str()),
            ("zoom", request.zoom.as_str()),
        ];
        query::build_url(&self.api_host, &base, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket() -> PdfBucket {
        PdfBucket::new(
            "635FBFIB3RL5BG68KEEC7HDA6N3I7PV2",
            "5jqzA88Qzdpy+nz/ouWMAVSwzq3AOCV8LjvwflKmLQs=",
            "test.pdfbucket.io",
        )
    }

    fn request() -> ConversionRequest {
        ConversionRequest::new("https://www.google.com", "landscape", "A4", "0px", "1.0")
    }

    #[test]
    fn validation_failure_returns_no_partial_url() {
        let mut req = request();
        req.page_size = "A5".into();
        assert_eq!(
            bucket().generate_url(&req),
            Err(PdfBucketError::InvalidPageSize("A5".into()))
        );
        assert_eq!(
            bucket().generate_plain_url(&req),
            Err(PdfBucketError::InvalidPageSize("A5".into()))
        );
    }

    #[test]
    fn instance_stays_usable_after_a_failed_call() {
        let b = bucket();
        let mut bad = request();
        bad.orientation = "diagonal".into();
        assert!(b.generate_plain_url(&bad).is_err());
        assert!(b.generate_plain_url(&request()).is_ok());
    }

    #[test]
    fn from_credentials_matches_new() {
        let creds = Credentials {
            api_key: "K".into(),
            api_secret: "Uw==".into(),
            api_host: "test.example.io".into(),
        };
        let b = PdfBucket::from_credentials(creds);
        let url = b.generate_plain_url(&request()).unwrap();
        assert!(url.starts_with("https://test.example.io/api/convert?api_key=K&"));
    }
}
