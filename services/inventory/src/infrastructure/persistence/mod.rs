//! Persistence implementations

pub mod migrations;
mod postgres;
mod rows;

pub use postgres::{PostgresInventoryRepository, PostgresProductRepository, PostgresStoreRepository};
