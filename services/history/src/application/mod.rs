//! 应用层

pub mod dates;
pub mod handler;

pub use dates::parse_timestamp;
pub use handler::*;
