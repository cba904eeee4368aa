//! Value objects for the domain layer

pub mod rendered_email;

pub use rendered_email::RenderedEmail;
