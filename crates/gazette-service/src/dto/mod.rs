//! Data transfer objects for the service layer.

pub mod article_dto;
pub mod auth_dto;

pub use article_dto::*;
pub use auth_dto::*;
