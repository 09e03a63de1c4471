//! Query-string assembly for `/api/convert` requests.
//!
//! Pure string construction; no network call. Encoding is
//! `application/x-www-form-urlencoded`, which is what the service parses.

use url::form_urlencoded;

/// Fixed request path on the API host.
pub const API_PATH: &str = "/api/convert";

/// Build the full request URL: fixed `https` scheme and path, base parameters
/// first in their fixed order, then the mode-specific pair(s).
pub fn build_url(host: &str, base: &[(&str, &str)], extra: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (name, value) in base.iter().chain(extra) {
        query.append_pair(name, value);
    }
    format!("https://{}{}?{}", host, API_PATH, query.finish())
}
