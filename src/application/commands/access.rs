use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub(super) fn ensure_can_manage(
    actor: &AuthenticatedUser,
    owner_id: UserId,
    resource: &str,
) -> ApplicationResult<()> {
    if actor.can_manage(owner_id) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "insufficient privileges to modify {resource}"
        )))
    }
}
