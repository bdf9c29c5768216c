// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, Profile, User, UserChanges, UserDraft};
pub use repository::UserRepository;
pub use value_objects::{ApiTokenHash, Email, PasswordHash, Role, UserId, UserRecord};
