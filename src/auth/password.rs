//! bcrypt hashing, run off the async executor.

use super::AuthError;

pub async fn hash_password(password: String, cost: u32) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// `Ok(false)` on mismatch; errors only when the stored hash is unreadable.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_verifies_only_original_password() {
        let hash = hash_password("correct horse".to_string(), 4).await.unwrap();
        assert_ne!(hash, "correct horse");
        assert!(verify_password("correct horse".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("battery staple".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn unreadable_hash_is_an_error() {
        let result = verify_password("anything".to_string(), "plaintext".to_string()).await;
        assert!(matches!(result, Err(AuthError::Hashing(_))));
    }
}
