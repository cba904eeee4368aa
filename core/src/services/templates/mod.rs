//! Email templates
//!
//! Rendering is pure: a user and a few values in, subject and HTML out.
//! `MessageRenderer` covers the verification lifecycle, `NoticeRenderer`
//! the order, review and contact notices.

mod gamecash;
mod notices;
mod renderer;

pub use gamecash::GameCashTemplates;
pub use renderer::{escape_html, MessageRenderer, NoticeRenderer};
