//! history-service - 操作历史记录与查询

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
