/// Build the request target: `<endpoint>?key=<credential>`
///
/// The credential is appended verbatim unless `encode_credential` is set,
/// in which case it is percent-encoded.
///
/// # Example
/// ```rust
/// use contracts::shared::request_url::build_request_url;
/// let url = build_request_url("https://host/v1/models/m:generateContent", "abc", false);
/// assert_eq!(url, "https://host/v1/models/m:generateContent?key=abc");
/// ```
pub fn build_request_url(endpoint_url: &str, credential: &str, encode_credential: bool) -> String {
    if encode_credential {
        format!("{}?key={}", endpoint_url, urlencoding::encode(credential))
    } else {
        format!("{}?key={}", endpoint_url, credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_credential() {
        assert_eq!(
            build_request_url("https://api.example.com/gen", "a b&c", false),
            "https://api.example.com/gen?key=a b&c"
        );
    }

    #[test]
    fn test_encoded_credential() {
        assert_eq!(
            build_request_url("https://api.example.com/gen", "a b&c", true),
            "https://api.example.com/gen?key=a%20b%26c"
        );
    }

    #[test]
    fn test_existing_query_is_not_merged() {
        assert_eq!(
            build_request_url("https://api.example.com/gen?alt=json", "k", false),
            "https://api.example.com/gen?alt=json?key=k"
        );
    }
}
