//! Unit tests for `daemon_context`.

mod support;
mod version_tests;
