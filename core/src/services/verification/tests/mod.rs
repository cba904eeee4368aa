//! Tests for the verification lifecycle

mod record_manager_tests;
mod scenarios;
