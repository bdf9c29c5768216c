// src/domain/slug/mod.rs
//! Unique, URL-safe identifiers derived from a record's identifying text.
mod assigner;
mod error;
mod value;

pub use assigner::{RecordType, SlugAssigner, SlugAssignment, SlugIndex, SlugPolicy, Sluggable};
pub use error::SlugError;
pub use value::{SENTINEL_SLUG, Slug};

/// Turns human-readable text into a slug candidate.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
