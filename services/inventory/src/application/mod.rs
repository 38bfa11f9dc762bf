//! 应用层

pub mod audit;
pub mod handler;

pub use audit::*;
pub use handler::*;
