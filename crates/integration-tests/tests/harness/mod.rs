//! Shared test harness: mock backends, config builder, test server

pub mod mock_backend;
pub mod server;
