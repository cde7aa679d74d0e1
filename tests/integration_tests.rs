// tests/integration_tests.rs
//! Integration tests across the vector, quaternion, basis and random modules

mod integration;
