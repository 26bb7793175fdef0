use crate::application::FilterStore;
use crate::domain::repositories::DealRepository;
use anyhow::{Context, Result};
use std::sync::Arc;

pub struct DealRepositoryUseCase {
    repository: Arc<dyn DealRepository>,
}

impl DealRepositoryUseCase {
    pub fn new(repository: Arc<dyn DealRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> Arc<dyn DealRepository> {
        Arc::clone(&self.repository)
    }
}

/// Loads the full deal list and hands it to the store in one `set_deals`
/// call, so subscribers see a single notification.
pub struct LoadDeals {
    use_case: DealRepositoryUseCase,
}

impl LoadDeals {
    pub fn new(repository: Arc<dyn DealRepository>) -> Self {
        Self {
            use_case: DealRepositoryUseCase::new(repository),
        }
    }

    pub async fn execute(&self, store: &mut FilterStore) -> Result<usize> {
        let deals = self
            .use_case
            .repository()
            .load_deals()
            .await
            .context("Failed to load deals")?;

        let count = deals.len();
        store.set_deals(deals);
        Ok(count)
    }
}

#[cfg(test)]
#[path = "deal_operations_test.rs"]
mod tests;
