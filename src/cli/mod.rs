//! Command-line wiring for the changelog run

pub mod orchestration;
