//! Percent-encoding for URL path segments
//!
//! The search text is embedded in the request path, so spaces must be
//! encoded as `%20`, not `+`.

/// Percent-encode a string for use as a URL path segment
///
/// Unreserved characters (RFC 3986) pass through; everything else,
/// including Unicode, is percent-encoded byte-wise.
pub(crate) fn encode_path_segment(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 2);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            },
            _ => {
                result.push('%');
                result.push_str(&format!("{byte:02X}"));
            },
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_path_segment("hello"), "hello");
    }

    #[test]
    fn test_encode_spaces_as_percent20() {
        assert_eq!(encode_path_segment("main st"), "main%20st");
    }

    #[test]
    fn test_encode_special_chars() {
        let encoded = encode_path_segment("5th & Broadway #2");
        assert!(encoded.contains("%26")); // &
        assert!(encoded.contains("%23")); // #
        assert!(!encoded.contains('&'));
    }

    #[test]
    fn test_encode_unicode() {
        let encoded = encode_path_segment("München");
        assert_eq!(encoded, "M%C3%BCnchen");
    }

    #[test]
    fn test_encode_preserves_safe_chars() {
        assert_eq!(encode_path_segment("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_path_segment(""), "");
    }

    #[test]
    fn test_encode_slash_is_escaped() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
    }
}
