//! Password hashing
//!
//! Credentials are stored as argon2id PHC strings
//! (`$argon2id$v=19$m=...,t=...,p=1$salt$hash`). Verification reads the
//! parameters back out of the stored string, so changing the cost settings
//! does not invalidate existing hashes.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::authenticator::AuthError;

#[derive(Clone)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for PasswordService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordService").finish_non_exhaustive()
    }
}

impl PasswordService {
    /// `memory_kib` and `iterations` are the argon2 m and t costs
    pub fn new(memory_kib: u32, iterations: u32) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, 1, None)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    /// False for a wrong password and for a malformed stored hash
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        match PasswordHash::new(stored_hash) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash could not be parsed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PasswordService {
        PasswordService::new(8, 1).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let service = service();
        let hash = service.hash("worker123").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(service.verify("worker123", &hash));
        assert!(!service.verify("worker124", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let service = service();
        assert_ne!(service.hash("hr123").unwrap(), service.hash("hr123").unwrap());
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!service().verify("admin123", "admin123"));
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        assert!(PasswordService::new(0, 0).is_err());
    }
}
