//! Food List Library
//!
//! This library provides a food catalog view with cart quantity controls and
//! a food summary submission, backed by an explicit application store.

// Domain modules
pub mod food;
pub mod store;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
