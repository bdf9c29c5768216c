// src/infrastructure/repositories/postgres_user.rs
use super::{map_sqlx, map_sqlx_for};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugIndex};
use crate::domain::user::{
    ApiTokenHash, Email, NewUser, PasswordHash, Profile, Role, User, UserId, UserRecord,
    UserRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

const USER_COLUMNS: &str = "id, email, password_hash, role, is_active, first_name, middle_name, \
     last_name, designation, started_at, location, skype, slack, description, avatar, \
     hover_avatar, api_token_hash, slug, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// `column` is always a literal from this module.
    async fn find_by_text_column(&self, column: &str, value: &str) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {column} = $1"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    role: String,
    is_active: bool,
    first_name: String,
    middle_name: String,
    last_name: String,
    designation: Option<String>,
    started_at: Option<NaiveDate>,
    location: Option<String>,
    skype: Option<String>,
    slack: Option<String>,
    description: Option<String>,
    avatar: Option<String>,
    hover_avatar: Option<String>,
    api_token_hash: Option<String>,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(row.id)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse::<Role>()?,
            is_active: row.is_active,
            profile: Profile {
                first_name: row.first_name,
                middle_name: row.middle_name,
                last_name: row.last_name,
                designation: row.designation,
                started_at: row.started_at,
                location: row.location,
                skype: row.skype,
                slack: row.slack,
                description: row.description,
                avatar: row.avatar,
                hover_avatar: row.hover_avatar,
            },
            api_token_hash: row.api_token_hash.map(ApiTokenHash::new).transpose()?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SlugIndex<UserRecord> for PostgresUserRepository {
    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        u64::try_from(count).map_err(|err| DomainError::Persistence(err.to_string()))
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            email,
            password_hash,
            role,
            is_active,
            profile: p,
            api_token_hash,
            slug,
            created_at,
        } = new_user;
        let slug = slug.ok_or_else(|| DomainError::Validation("user has no slug assigned".into()))?;

        // username mirrors email
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (email, username, password_hash, role, is_active, first_name,
                 middle_name, last_name, designation, started_at, location, skype, slack,
                 description, avatar, hover_avatar, api_token_hash, slug, created_at)
             VALUES ($1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(role.as_str())
        .bind(is_active)
        .bind(p.first_name)
        .bind(p.middle_name)
        .bind(p.last_name)
        .bind(p.designation)
        .bind(p.started_at)
        .bind(p.location)
        .bind(p.skype)
        .bind(p.slack)
        .bind(p.description)
        .bind(p.avatar)
        .bind(p.hover_avatar)
        .bind(api_token_hash.map(String::from))
        .bind(slug.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_for(&slug))?;

        User::try_from(row)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let p = &user.profile;
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users
             SET email = $1, username = $1, password_hash = $2, role = $3, is_active = $4,
                 first_name = $5, middle_name = $6, last_name = $7, designation = $8,
                 started_at = $9, location = $10, skype = $11, slack = $12, description = $13,
                 avatar = $14, hover_avatar = $15, slug = $16, updated_at = $17
             WHERE id = $18
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.role.as_str())
        .bind(user.is_active)
        .bind(&p.first_name)
        .bind(&p.middle_name)
        .bind(&p.last_name)
        .bind(&p.designation)
        .bind(p.started_at)
        .bind(&p.location)
        .bind(&p.skype)
        .bind(&p.slack)
        .bind(&p.description)
        .bind(&p.avatar)
        .bind(&p.hover_avatar)
        .bind(user.slug.as_str())
        .bind(user.updated_at)
        .bind(i64::from(user.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_for(&user.slug))?;

        row.ok_or_else(|| DomainError::NotFound("user not found".into()))
            .and_then(User::try_from)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        self.find_by_text_column("email", email.as_str()).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<User>> {
        self.find_by_text_column("slug", slug.as_str()).await
    }

    async fn find_by_api_token_hash(&self, hash: &ApiTokenHash) -> DomainResult<Option<User>> {
        self.find_by_text_column("api_token_hash", hash.as_str())
            .await
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn set_api_token_hash(&self, id: UserId, hash: Option<ApiTokenHash>) -> DomainResult<()> {
        let result = sqlx::query("UPDATE users SET api_token_hash = $1 WHERE id = $2")
            .bind(hash.map(String::from))
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }
}
