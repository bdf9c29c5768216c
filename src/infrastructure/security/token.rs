use crate::application::{
    error::ApplicationResult,
    ports::security::{IssuedToken, TokenGenerator},
};
use crate::domain::user::ApiTokenHash;
use argon2::password_hash::rand_core::{OsRng, RngCore};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

const TOKEN_BYTES: usize = 32;

/// Random URL-safe base64 tokens; only their blake3 digest is ever persisted.
#[derive(Default, Clone)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> ApplicationResult<IssuedToken> {
        let mut bytes = [0_u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        let plaintext = URL_SAFE_NO_PAD.encode(bytes);
        let hash = self.hash(&plaintext)?;
        Ok(IssuedToken { plaintext, hash })
    }

    fn hash(&self, token: &str) -> ApplicationResult<ApiTokenHash> {
        Ok(ApiTokenHash::new(blake3::hash(token.as_bytes()).to_hex().as_str())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_url_safe_and_hash_consistently() {
        let generator = RandomTokenGenerator;
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();

        // 32 bytes, unpadded.
        assert_eq!(first.plaintext.len(), 43);
        assert!(
            first
                .plaintext
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert_eq!(URL_SAFE_NO_PAD.decode(&first.plaintext).unwrap().len(), TOKEN_BYTES);
        assert_ne!(first.plaintext, second.plaintext);

        assert_eq!(generator.hash(&first.plaintext).unwrap(), first.hash);
        assert_ne!(first.hash.as_str(), first.plaintext);
    }
}
