// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{CreateUserCommand, DeleteUserCommand, UpdateUserCommand},
    dto::{CreatedUserDto, UserDto},
    queries::users::{GetUserByIdQuery, GetUserBySlugQuery},
};
use crate::domain::user::UserChanges;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Account fields. On update, omitted fields keep their stored value, a blank
/// optional field (`started_at` included) is cleared and a blank `password`
/// leaves the password unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub designation: Option<String>,
    #[schema(format = Date, example = "2021-03-04")]
    pub started_at: Option<String>,
    pub location: Option<String>,
    pub skype: Option<String>,
    pub slack: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub hover_avatar: Option<String>,
}

impl UserRequest {
    fn into_parts(self) -> (UserChanges, Option<String>) {
        let changes = UserChanges {
            email: self.email,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            designation: self.designation,
            started_at: self.started_at,
            location: self.location,
            skype: self.skype,
            slack: self.slack,
            description: self.description,
            avatar: self.avatar,
            hover_avatar: self.hover_avatar,
        };
        (changes, self.password)
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "All accounts.", body = [UserDto]),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_users()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The account.", body = UserDto),
        (status = 404, description = "No such account.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(GetUserByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/by-slug/{slug}",
    params(("slug" = String, Path, description = "User slug")),
    responses(
        (status = 200, description = "The account.", body = UserDto),
        (status = 404, description = "No such account.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user_by_slug(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user_by_slug(GetUserBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "Account created; the API token is only returned here.", body = CreatedUserDto),
        (status = 400, description = "Invalid fields.", body = ErrorResponse),
        (status = 409, description = "Email already registered.", body = ErrorResponse)
    ),
    security(()),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<UserRequest>,
) -> HttpResult<(StatusCode, Json<CreatedUserDto>)> {
    let (fields, password) = payload.into_parts();

    state
        .services
        .user_commands
        .create_user(CreateUserCommand { fields, password })
        .await
        .into_http()
        .map(|created| (StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "The updated account.", body = UserDto),
        (status = 403, description = "Not your account.", body = ErrorResponse),
        (status = 404, description = "No such account.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UserRequest>,
) -> HttpResult<Json<UserDto>> {
    let (fields, password) = payload.into_parts();

    state
        .services
        .user_commands
        .update_user(&user, UpdateUserCommand { id, fields, password })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "Account and its articles deleted."),
        (status = 403, description = "Not your account.", body = ErrorResponse),
        (status = 404, description = "No such account.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .delete_user(&user, DeleteUserCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
