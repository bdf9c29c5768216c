use crate::domain::user::{Role, User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The account behind a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Owners and admins may modify a resource.
    pub fn can_manage(&self, owner_id: UserId) -> bool {
        self.id == owner_id || self.is_admin()
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.to_string(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub api_token: String,
    pub role: String,
    pub email: String,
}
