pub mod article;
pub mod errors;
pub mod slug;
pub mod user;
pub mod validation;
