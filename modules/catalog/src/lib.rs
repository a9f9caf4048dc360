//! PC hardware catalog: reference data and component CRUD over a relational
//! store, exposed as a REST API.
//!
//! Layering follows the usual split: `domain` holds models, services and
//! repository ports, `infra::storage` the SeaORM implementations, `api::rest`
//! the HTTP surface. [`module::build_state`] wires the three together.

pub mod api;
pub mod domain;
pub mod infra;
pub mod module;
