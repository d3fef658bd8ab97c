//! Unit tests for `daemon_vocabulary` types.
