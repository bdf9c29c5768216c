// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, Response, header};
use folio_core::application::commands::users::CreateUserCommand;
use folio_core::application::dto::{AuthenticatedUser, CreatedUserDto};
use folio_core::application::services::ApplicationServices;
use folio_core::domain::article::ArticleChanges;
use folio_core::domain::slug::SlugPolicy;
use folio_core::domain::user::UserChanges;
use folio_core::infrastructure::util::DefaultSlugGenerator;
use folio_core::presentation::http::{routes::build_router_without_rate_limit, state::HttpState};
use serde_json::Value;

use super::mocks::{
    CountingTokenGenerator, FixedClock, InMemoryArticleRepo, InMemoryUserRepo,
    PlainPasswordHasher,
};

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub users: Arc<InMemoryUserRepo>,
    pub articles: Arc<InMemoryArticleRepo>,
}

pub fn build_services() -> TestApp {
    build_services_with(InMemoryArticleRepo::new())
}

pub fn build_services_with(articles: InMemoryArticleRepo) -> TestApp {
    let users = Arc::new(InMemoryUserRepo::new());
    let articles = Arc::new(articles);

    let services = Arc::new(ApplicationServices::new(
        users.clone(),
        articles.clone(),
        articles.clone(),
        Arc::new(PlainPasswordHasher),
        Arc::new(CountingTokenGenerator::default()),
        Arc::new(FixedClock),
        Arc::new(DefaultSlugGenerator),
        SlugPolicy::default(),
    ));

    TestApp {
        services,
        users,
        articles,
    }
}

pub fn make_test_router(app: &TestApp) -> axum::Router {
    let state = HttpState {
        services: Arc::clone(&app.services),
    };
    build_router_without_rate_limit(state, &["*".to_string()])
}

pub fn user_fields(email: &str, first: &str, middle: &str, last: &str) -> UserChanges {
    UserChanges {
        email: Some(email.into()),
        first_name: Some(first.into()),
        middle_name: Some(middle.into()),
        last_name: Some(last.into()),
        ..UserChanges::default()
    }
}

pub fn article_fields(title: &str) -> ArticleChanges {
    ArticleChanges {
        kind: Some("blog".into()),
        title: Some(title.into()),
        summary: Some("A short summary".into()),
        content: Some("Body text".into()),
        ..ArticleChanges::default()
    }
}

/// Register an account and resolve its token back to the caller identity.
pub async fn register(
    app: &TestApp,
    email: &str,
    first: &str,
    last: &str,
) -> (CreatedUserDto, AuthenticatedUser) {
    let created = app
        .services
        .user_commands
        .create_user(CreateUserCommand {
            fields: user_fields(email, first, "Q", last),
            password: Some("correct horse".into()),
        })
        .await
        .expect("register user");
    let actor = app
        .services
        .authenticate(&created.api_token)
        .await
        .expect("fresh token authenticates");
    (created, actor)
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("valid request")
}

pub async fn read_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
