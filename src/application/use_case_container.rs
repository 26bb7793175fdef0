use crate::application::use_cases::*;
use crate::domain::repositories::DealRepository;
use std::sync::Arc;

pub struct UseCaseContainer {
    pub load_deals: Arc<LoadDeals>,
}

impl UseCaseContainer {
    pub fn new(deal_repository: Arc<dyn DealRepository>) -> Self {
        Self {
            load_deals: Arc::new(LoadDeals::new(Arc::clone(&deal_repository))),
        }
    }
}
