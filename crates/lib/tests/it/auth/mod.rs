//! Auth module integration tests
