//! Domain model: entities and value objects.

pub mod entities;
pub mod value_objects;

pub use entities::{Article, ArticleChanges, User};
pub use value_objects::{Email, EmailError};
