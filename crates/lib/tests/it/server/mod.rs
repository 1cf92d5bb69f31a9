//! HTTP API integration tests
