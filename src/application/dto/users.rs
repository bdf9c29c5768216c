use crate::domain::user::User;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub role: String,
    pub is_active: bool,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub full_name: String,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub started_at: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skype: Option<String>,
    #[serde(default)]
    pub slack: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub hover_avatar: Option<String>,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let full_name = user.full_name();
        let username = user.username().to_owned();
        let profile = user.profile;
        Self {
            id: user.id.into(),
            email: user.email.into(),
            username,
            role: user.role.to_string(),
            is_active: user.is_active,
            first_name: profile.first_name,
            middle_name: profile.middle_name,
            last_name: profile.last_name,
            full_name,
            designation: profile.designation,
            started_at: profile.started_at,
            location: profile.location,
            skype: profile.skype,
            slack: profile.slack,
            description: profile.description,
            avatar: profile.avatar,
            hover_avatar: profile.hover_avatar,
            slug: user.slug.into_inner(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Returned once, on registration. The token cannot be recovered later.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedUserDto {
    pub user: UserDto,
    pub api_token: String,
}
