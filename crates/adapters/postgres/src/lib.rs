//! stock-adapter-postgres - PostgreSQL 适配器

mod config;
mod connection;
mod filter;
mod migration;

pub use config::*;
pub use connection::*;
pub use filter::*;
pub use migration::*;
