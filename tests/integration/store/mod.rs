//! Store adapter integration tests
//!
//! The full router wired to a hosted-store adapter whose upstream is mocked.

mod supabase_test;
