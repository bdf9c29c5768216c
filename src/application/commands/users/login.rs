use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, LoginDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Verify credentials and rotate the account's API token.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginDto> {
        let user = self
            .find_and_authenticate_user(command.email, &command.password)
            .await?;

        let token = self.token_generator.generate()?;
        self.user_repo
            .set_api_token_hash(user.id, Some(token.hash))
            .await?;

        tracing::info!(user_id = user.id.0, "api token issued");
        Ok(LoginDto {
            api_token: token.plaintext,
            role: user.role.to_string(),
            email: user.email.to_string(),
        })
    }

    /// Invalidate the caller's token. Any later request with it is rejected.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        self.user_repo.set_api_token_hash(actor.id, None).await?;
        tracing::info!(user_id = actor.id.0, "api token revoked");
        Ok(())
    }

    async fn find_and_authenticate_user(
        &self,
        email: String,
        password: &str,
    ) -> ApplicationResult<User> {
        let email =
            Email::new(email).map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
