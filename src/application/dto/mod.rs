pub mod articles;
pub mod auth;
pub mod users;

pub use articles::{ArticleDto, PublicArticleDto};
pub use auth::{AuthenticatedUser, LoginDto};
pub use users::{CreatedUserDto, UserDto};
