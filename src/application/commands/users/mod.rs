// src/application/commands/users/mod.rs
mod create;
mod delete;
mod login;
mod password;
mod service;
mod update;

pub use create::CreateUserCommand;
pub use delete::DeleteUserCommand;
pub use login::LoginCommand;
pub use service::{UserCommandService, UserSlugAssigner};
pub use update::UpdateUserCommand;
