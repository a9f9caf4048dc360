//! SeaORM-backed persistence: entities, migrations, repository
//! implementations.

pub mod dictionary_repo;
pub mod entity;
pub mod migrations;
pub mod repos;
