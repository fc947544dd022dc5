//! Property-based tests

mod password_proptest;
