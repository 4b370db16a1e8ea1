pub mod api;
pub mod error;
pub mod handlers;
#[cfg(feature = "lambda")]
pub mod runtime;

pub use api::ProductApi;
pub use error::ApiError;
