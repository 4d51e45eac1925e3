//! Shared helpers for integration tests.

pub mod fake_api;
pub mod mock_data;
pub mod server;
