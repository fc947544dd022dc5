//! Integration tests against the assembled router

pub mod store;
