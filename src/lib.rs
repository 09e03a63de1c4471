//! PDFBucket client: build signed or encrypted request URLs for the
//! pdfbucket.io HTML-to-PDF conversion API.
//!
//! The crate only constructs URL strings; it never issues a network request.
//! Confidential mode encrypts the source URL (`encrypted_uri` parameter);
//! plaintext mode carries it in the clear, integrity-protected by a signature
//! (`uri` + `signature` parameters).
//!
//! ```
//! use pdfbucket::{ConversionRequest, PdfBucket};
//!
//! let bucket = PdfBucket::new(
//!     "my-api-key",
//!     "5jqzA88Qzdpy+nz/ouWMAVSwzq3AOCV8LjvwflKmLQs=",
//!     "api.pdfbucket.io",
//! );
//! let request = ConversionRequest::new("https://www.example.com", "portrait", "A4", "0px", "0.5");
//! let url = bucket.generate_url(&request)?;
//! assert!(url.starts_with("https://api.pdfbucket.io/api/convert?"));
//! # Ok::<(), pdfbucket::PdfBucketError>(())
//! ```

pub mod bucket;
pub mod config;
pub mod encrypt;
pub mod error;
pub mod query;
pub mod request;
pub mod sign;
pub mod validate;

pub use bucket::PdfBucket;
pub use config::Credentials;
pub use error::PdfBucketError;
pub use request::ConversionRequest;
