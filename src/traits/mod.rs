//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`SystemBridge`] - URL launching and clipboard access

pub mod system;

pub use system::SystemBridge;
