//! HTTP surface: DTOs, handlers, error mapping and the router.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::router;
