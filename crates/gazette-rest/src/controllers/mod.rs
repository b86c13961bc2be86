//! REST API controllers.

pub mod article_controller;
pub mod auth_controller;
pub mod health_controller;

pub use health_controller::*;
