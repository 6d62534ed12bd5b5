//! Integration tests for pixl crates.
//!
//! End-to-end scenarios that chain gallery loading, synthetic images and
//! several transforms, checking how they interact.
