//! Custom Axum extractors.

mod claims;
mod filter;
mod validated;

pub use claims::*;
pub use filter::*;
pub use validated::*;
