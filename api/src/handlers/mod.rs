//! Request handling helpers shared by all routes

pub mod error;

pub use error::{domain_error_response, json_error_handler, validation_error_response};
