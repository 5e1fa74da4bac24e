//! Cache Key Module
//!
//! Derives a stable, fixed-length identifier from request parameters.

/// Derives the cache key for a request input string.
///
/// Deterministic md5 digest rendered as 32 lowercase hex characters.
/// Collisions are accepted as a risk rather than mitigated; the keyspace
/// only needs to be wide enough for the configured entry count.
pub fn derive(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_deterministic() {
        assert_eq!(derive("http://host/a.png100200"), derive("http://host/a.png100200"));
    }

    #[test]
    fn test_derive_known_vectors() {
        assert_eq!(derive(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(derive("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_derive_fixed_length_hex() {
        let key = derive("http://example.com/image.png8064");
        assert_eq!(key.len(), 32);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_derive_distinguishes_inputs() {
        assert_ne!(derive("http://host/a.png100200"), derive("http://host/a.png200100"));
    }
}
