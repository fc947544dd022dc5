//! Test suite for the storefront auth server
//!
//! This module organizes all tests

pub mod integration;
pub mod property;
