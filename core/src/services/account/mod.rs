//! Account status projection

mod projector;

pub use projector::AccountStatusProjector;
