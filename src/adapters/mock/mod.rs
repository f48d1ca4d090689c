//! Test doubles for the adapters.

mod bridge;

pub use bridge::RecordingBridge;
