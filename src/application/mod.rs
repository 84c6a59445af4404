pub mod dto;
pub mod error;
pub mod forms;
pub mod ports;
pub mod services;

pub use error::ApplicationResult;
