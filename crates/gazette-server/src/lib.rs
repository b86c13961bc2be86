//! # Gazette Server Library
//!
//! Dependency injection configuration and startup utilities for the
//! Gazette server binary.

pub mod di;
