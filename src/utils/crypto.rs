use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use crate::error::Result;

/// Salted argon2id hash in PHC string form.
pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plain.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Comparison is constant-time inside argon2. A stored hash that cannot be
/// parsed is an error, not a mismatch.
pub fn verify_password(plain: &str, stored: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored)?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn hashes_are_salted_and_verify() {
        let first = assert_ok!(hash_password("hunter2"));
        let second = assert_ok!(hash_password("hunter2"));
        assert_ne!(first, second);
        assert!(first.starts_with("$argon2"));
        assert!(assert_ok!(verify_password("hunter2", &first)));
        assert!(!assert_ok!(verify_password("hunter3", &first)));
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert_err!(verify_password("hunter2", "not-a-phc-string"));
    }
}
