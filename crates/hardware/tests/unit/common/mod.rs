//! Unit tests for shared helpers.
