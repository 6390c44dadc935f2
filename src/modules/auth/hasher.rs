use sha2::{Digest, Sha256};

/// Length of a hex encoded SHA-256 digest
pub const DIGEST_HEX_LEN: usize = 64;

/// Hash a password into a lowercase hex SHA-256 digest.
///
/// Unsalted and single round so that existing store files keep verifying.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Check that a stored value looks like a digest produced by [`hash_password`]
pub fn is_digest(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::Rng;
    use std::collections::HashMap;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_is_deterministic_and_fixed_length() {
        let first = hash_password("Passw0rd!");
        let second = hash_password("Passw0rd!");
        assert_eq!(first, second);
        assert_eq!(first.len(), DIGEST_HEX_LEN);
        assert_eq!(hash_password(&"x".repeat(1000)).len(), DIGEST_HEX_LEN);
        assert!(is_digest(&first));
    }

    #[test]
    fn test_distinct_passwords_have_distinct_digests() {
        let mut rng = rand::thread_rng();
        let mut seen: HashMap<String, String> = HashMap::new();

        for _ in 0..500 {
            let len = rng.gen_range(6..=20);
            let password: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();
            let digest = hash_password(&password);
            if let Some(previous) = seen.insert(digest, password.clone()) {
                assert_eq!(previous, password);
            }
        }
    }

    #[test]
    fn test_is_digest_rejects_other_values() {
        assert!(!is_digest("abc"));
        assert!(!is_digest(&"A".repeat(DIGEST_HEX_LEN)));
        assert!(!is_digest(&"g".repeat(DIGEST_HEX_LEN)));
    }
}
