//! Common utility functions

pub mod email;
pub mod timestamp;
pub mod validation;
