use super::UserCommandService;
use crate::{
    application::{
        commands::access::ensure_can_manage,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct DeleteUserCommand {
    pub id: i64,
}

impl UserCommandService {
    /// Removes the account together with the articles it authored.
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteUserCommand,
    ) -> ApplicationResult<()> {
        let id = UserId::new(command.id)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        ensure_can_manage(actor, user.id, "user")?;

        self.user_repo.delete(id).await?;
        tracing::info!(user_id = id.0, actor_id = actor.id.0, "user deleted");
        Ok(())
    }
}
