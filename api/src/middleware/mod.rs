pub mod api_key;
pub mod cors;

pub use api_key::{ApiKeyAuth, ApiKeyAuthMiddleware};
pub use cors::create_cors;
