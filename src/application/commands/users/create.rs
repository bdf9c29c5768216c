// src/application/commands/users/create.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{CreatedUserDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        user::{NewUser, PasswordHash, Role, UserChanges, UserDraft},
        validation::FieldErrors,
    },
};

pub struct CreateUserCommand {
    pub fields: UserChanges,
    pub password: Option<String>,
}

impl UserCommandService {
    /// Register an account. The very first account becomes an admin.
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<CreatedUserDto> {
        let mut errors = FieldErrors::new();
        let password = errors.capture("password", validate_password(command.password));
        let draft = UserDraft::validate_into(command.fields, errors)?;
        let password =
            password.ok_or_else(|| ApplicationError::validation("password is required"))?;

        if self.user_repo.find_by_email(&draft.email).await?.is_some() {
            return Err(ApplicationError::conflict("email is already registered"));
        }

        let role = if self.user_repo.count().await? == 0 {
            Role::Admin
        } else {
            Role::Api
        };

        let password_hash = PasswordHash::new(self.password_hasher.hash(&password).await?)?;
        let token = self.token_generator.generate()?;
        let mut user = NewUser::new(draft, password_hash, role, self.clock.now())
            .with_api_token_hash(token.hash);
        let full_name = user.full_name();

        let repo = &self.user_repo;
        let created = self
            .slugs
            .assign_and_persist(&full_name, &mut user, move |candidate| repo.insert(candidate))
            .await?;

        tracing::info!(user_id = created.id.0, slug = %created.slug, role = %created.role, "user created");
        Ok(CreatedUserDto {
            user: UserDto::from(created),
            api_token: token.plaintext,
        })
    }
}
