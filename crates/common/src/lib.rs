//! stock-common - 通用类型和工具库

pub mod history;
pub mod query;
pub mod types;

pub use history::*;
pub use query::*;
pub use types::*;
