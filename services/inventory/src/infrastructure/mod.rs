//! 基础设施层

pub mod history_client;
pub mod persistence;

pub use history_client::HistoryClient;
pub use persistence::{
    PostgresInventoryRepository, PostgresProductRepository, PostgresStoreRepository,
};
