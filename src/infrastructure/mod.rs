pub mod config_repository;
pub mod json_deal_repository;

pub use config_repository::ConfigRepository;
pub use json_deal_repository::JsonDealRepository;
