pub mod config;
pub mod deal;
pub mod filter_state;

pub use config::AppConfig;
pub use deal::{Deal, Provider, ProviderId};
pub use filter_state::FilterState;
