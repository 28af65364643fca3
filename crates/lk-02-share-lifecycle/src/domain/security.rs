//! # Token Hygiene
//!
//! Cheap shape checks applied to candidate tokens before any directory
//! lookup. A token that cannot have been minted here is rejected without a
//! store round trip, and the rejection is indistinguishable from an unknown
//! token.

/// Upper bound on accepted token length. Minted tokens are 36-char UUIDs;
/// the slack tolerates a future generator change without a lockout.
pub const MAX_TOKEN_LEN: usize = 64;

/// Whether a candidate string could plausibly be a minted token.
///
/// Accepts non-empty, ASCII-graphic strings up to [`MAX_TOKEN_LEN`] without
/// path-meaningful characters (tokens travel inside URLs).
pub fn is_plausible_token(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.len() <= MAX_TOKEN_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_graphic() && b != b'/' && b != b'?' && b != b'#' && b != b'%')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_uuid_shape_is_plausible() {
        assert!(is_plausible_token("3f2a7c1e-9d4b-4e8a-b1c6-2f0d9e8a7b65"));
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert!(!is_plausible_token(""));
        assert!(!is_plausible_token(&"a".repeat(MAX_TOKEN_LEN + 1)));
    }

    #[test]
    fn test_rejects_url_meaningful_bytes() {
        assert!(!is_plausible_token("abc/def"));
        assert!(!is_plausible_token("abc?x=1"));
        assert!(!is_plausible_token("abc#frag"));
        assert!(!is_plausible_token("abc%2f"));
        assert!(!is_plausible_token("abc def"));
    }
}
