use crate::domain::errors::DomainError;
use crate::domain::slug::{Slug, SlugError};

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_USER_SLUG: &str = "users_slug_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_TOKEN: &str = "users_api_token_hash_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    map_error(err, None)
}

/// Like [`map_sqlx`], for statements writing `slug`: a slug uniqueness
/// violation becomes [`SlugError::PersistenceConflict`] so the caller can retry.
pub fn map_sqlx_for(slug: &Slug) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |err| map_error(err, Some(slug))
}

fn map_error(err: sqlx::Error, slug: Option<&Slug>) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG | CNT_USER_SLUG => match slug {
                        Some(slug) => SlugError::PersistenceConflict(slug.to_string()).into(),
                        None => DomainError::Conflict("slug already exists".into()),
                    },
                    CNT_USER_EMAIL | CNT_USER_USERNAME => {
                        DomainError::Conflict("email is already registered".into())
                    }
                    CNT_USER_TOKEN => DomainError::Conflict("api token collision".into()),
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_persistence_failures() {
        let err = map_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Persistence(_)));

        let slug = Slug::new("a-title").unwrap();
        let err = map_sqlx_for(&slug)(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
