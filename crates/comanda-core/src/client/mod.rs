//! HTTP access to the restaurant services.

pub mod backend;
pub mod errors;
pub mod gateway;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::RestaurantBackend;
pub use errors::ApiError;
pub use gateway::GatewayClient;
