//! Integration tests for lazy future types.

mod finally;
mod resolution;
mod trigger;
