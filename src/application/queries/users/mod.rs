mod get;
mod list;
mod service;

pub use get::{GetUserByIdQuery, GetUserBySlugQuery};
pub use service::UserQueryService;
