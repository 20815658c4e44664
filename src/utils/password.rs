use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hashed: &str) -> Result<bool, AppError> {
    verify(password, hashed)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_never_the_plaintext() {
        let hashed = hash_password("correcthorse").unwrap();
        assert_ne!(hashed, "correcthorse");
        assert!(hashed.starts_with("$2"));
    }

    #[test]
    fn verify_accepts_matching_password_only() {
        let hashed = hash_password("secret123").unwrap();
        assert!(verify_password("secret123", &hashed).unwrap());
        assert!(!verify_password("wrong", &hashed).unwrap());
    }
}
