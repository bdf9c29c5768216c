// src/application/ports/security.rs
use crate::application::ApplicationResult;
use crate::domain::user::ApiTokenHash;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// Fails with `Unauthorized` when `password` does not match.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// A freshly minted API token. `plaintext` is shown to the client once.
#[derive(Clone)]
pub struct IssuedToken {
    pub plaintext: String,
    pub hash: ApiTokenHash,
}

impl std::fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedToken").finish_non_exhaustive()
    }
}

pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> ApplicationResult<IssuedToken>;
    /// Digest used to look a presented token up.
    fn hash(&self, token: &str) -> ApplicationResult<ApiTokenHash>;
}
