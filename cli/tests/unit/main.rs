//! Unit tests for the pwp CLI
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod architecture;
mod bootstrap_service;
mod negotiate_service;
mod property_tests;
