pub mod event_bus;
pub mod filter_store;
pub mod use_case_container;
pub mod use_cases;

pub use event_bus::{EventBus, SubscriptionId};
pub use filter_store::FilterStore;
pub use use_case_container::UseCaseContainer;
