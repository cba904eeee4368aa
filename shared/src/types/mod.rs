//! Type definitions shared across crates
//!
//! - `language` - Accept-Language negotiation for localized messages

pub mod language;

pub use language::Language;
