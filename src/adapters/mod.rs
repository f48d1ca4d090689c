//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`SystemLauncher`] - Opens URLs via `open`, clipboard via `arboard`
//!
//! # Mock Implementations
//!
//! - [`mock::RecordingBridge`] - Records outbound calls for tests

pub mod mock;
pub mod system_launcher;

pub use mock::RecordingBridge;
pub use system_launcher::SystemLauncher;
