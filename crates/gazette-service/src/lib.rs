//! # Gazette Service
//!
//! Business logic service layer for Gazette.
//! Contains the article and authentication use cases.

pub mod access;
pub mod article_service;
pub mod auth_service;
pub mod cache;
pub mod dto;
pub mod r#impl;

pub use access::*;
pub use article_service::*;
pub use auth_service::*;
pub use cache::*;
pub use dto::*;
pub use r#impl::*;
