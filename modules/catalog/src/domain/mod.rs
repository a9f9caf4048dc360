pub mod error;
pub mod model;
pub mod page;
pub mod repo;
pub mod service;
