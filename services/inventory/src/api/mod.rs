//! HTTP 接口层

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::routes;
