//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `accessors`: Token, organisation, policy, and timeout resolution tests
//! - `loading`: End-to-end loading from CLI arguments and environment

mod helpers;
