//! Result type aliases for Gazette.

use crate::GazetteError;

/// A specialized `Result` type for Gazette operations.
pub type GazetteResult<T> = Result<T, GazetteError>;
