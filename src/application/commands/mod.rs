pub mod articles;
mod access;
pub mod users;
