use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        commands::access::ensure_can_manage,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        user::{PasswordHash, UserChanges, UserDraft, UserId},
        validation::FieldErrors,
    },
};

pub struct UpdateUserCommand {
    pub id: i64,
    /// Only the provided fields are changed.
    pub fields: UserChanges,
    /// New password; blank means unchanged.
    pub password: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let id = UserId::new(command.id)?;
        let mut user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        ensure_can_manage(actor, user.id, "user")?;

        let mut errors = FieldErrors::new();
        let password = command
            .password
            .filter(|p| !p.trim().is_empty())
            .and_then(|p| errors.capture("password", validate_password(Some(p))));
        let draft = UserDraft::validate_into(user.changes().merge(command.fields), errors)?;

        if draft.email != user.email {
            let taken = self
                .user_repo
                .find_by_email(&draft.email)
                .await?
                .is_some_and(|other| other.id != user.id);
            if taken {
                return Err(ApplicationError::conflict("email is already registered"));
            }
        }

        let name_changed = user.apply(draft, self.clock.now());
        if let Some(password) = password {
            let hash = self.password_hasher.hash(&password).await?;
            user.set_password(PasswordHash::new(hash)?);
        }

        let updated = if name_changed {
            let full_name = user.full_name();
            let repo = &self.user_repo;
            self.slugs
                .assign_and_persist(&full_name, &mut user, move |candidate| repo.update(candidate))
                .await?
        } else {
            self.user_repo.update(user).await?
        };

        Ok(updated.into())
    }
}
