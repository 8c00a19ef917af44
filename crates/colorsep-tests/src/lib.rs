//! Integration tests for colorsep crates.
//!
//! End-to-end checks across profile loading, matrix derivation, separation
//! and buffer layout.

#[cfg(test)]
mod golden;
