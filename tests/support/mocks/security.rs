// tests/support/mocks/security.rs
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use folio_core::application::ApplicationResult;
use folio_core::application::error::ApplicationError;
use folio_core::application::ports::security::{IssuedToken, PasswordHasher, TokenGenerator};
use folio_core::domain::user::ApiTokenHash;

/// Stores passwords with a visible prefix so tests can assert on them.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash.strip_prefix("plain:") == Some(password) {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Issues `token-1`, `token-2`, ... in order.
#[derive(Default)]
pub struct CountingTokenGenerator {
    issued: AtomicU64,
}

impl TokenGenerator for CountingTokenGenerator {
    fn generate(&self) -> ApplicationResult<IssuedToken> {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let plaintext = format!("token-{n}");
        let hash = self.hash(&plaintext)?;
        Ok(IssuedToken { plaintext, hash })
    }

    fn hash(&self, token: &str) -> ApplicationResult<ApiTokenHash> {
        Ok(ApiTokenHash::new(format!("digest:{token}"))?)
    }
}
