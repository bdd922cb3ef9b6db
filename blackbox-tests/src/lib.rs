//! Black Box Tests for dalcheck
//!
//! These tests only use the public API - no internal crate access.
//! This simulates what a storage-driver author would experience: implement
//! the `Datastore` trait for their backend, then run the conformance suite
//! against it from their own tests.
