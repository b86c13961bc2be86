//! # Gazette Repository
//!
//! Data access layer for Gazette backed by SQLx and MySQL.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ArticleRepository> / Arc<dyn UserRepository>
//! MySqlArticleRepository / MySqlUserRepository
//!   ↓
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
