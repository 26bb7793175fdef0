pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;

pub use error::DealError;
