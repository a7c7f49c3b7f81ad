//! HTTP utilities for statistics provider communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};

/// Header carrying the provider API key.
pub const API_KEY_HEADER: &str = "x-apisports-key";

/// Build the headers sent with every upstream request.
pub fn api_header_map(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let mut key = HeaderValue::from_str(api_key)?;
    key.set_sensitive(true);
    h.insert(HeaderName::from_static(API_KEY_HEADER), key);
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DukeError;

    #[test]
    fn test_api_header_map_contains_key() {
        let headers = api_header_map("secret").unwrap();

        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "secret");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_api_header_map_marks_key_sensitive() {
        let headers = api_header_map("secret").unwrap();
        assert!(headers.get(API_KEY_HEADER).unwrap().is_sensitive());
    }

    #[test]
    fn test_api_header_map_rejects_invalid_key() {
        let result = api_header_map("bad\nkey");
        assert!(matches!(result, Err(DukeError::InvalidHeader(_))));
    }
}
