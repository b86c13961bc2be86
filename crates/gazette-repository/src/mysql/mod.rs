//! MySQL repository implementations.

mod article_repository;
mod user_repository;

pub use article_repository::*;
pub use user_repository::*;
