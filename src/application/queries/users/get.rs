use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{slug::Slug, user::UserId},
};

pub struct GetUserByIdQuery {
    pub id: i64,
}

pub struct GetUserBySlugQuery {
    pub slug: String,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserByIdQuery) -> ApplicationResult<UserDto> {
        let id = UserId::new(query.id)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }

    pub async fn get_user_by_slug(&self, query: GetUserBySlugQuery) -> ApplicationResult<UserDto> {
        let Ok(slug) = Slug::new(query.slug) else {
            return Err(ApplicationError::not_found("user not found"));
        };
        self.user_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}
