//! Testing utilities for octohub.
//!
//! Provides a [`RecordingConnection`] that stands in for GitHub, so code
//! built on the clients can be tested without network access.

mod mock;

pub use mock::RecordingConnection;
