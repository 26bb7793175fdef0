use super::*;
use crate::domain::entities::{Deal, FilterState, Provider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

struct StaticDealRepository {
    deals: Vec<Deal>,
}

#[async_trait]
impl DealRepository for StaticDealRepository {
    async fn load_deals(&self) -> Result<Vec<Deal>> {
        Ok(self.deals.clone())
    }
}

struct FailingDealRepository;

#[async_trait]
impl DealRepository for FailingDealRepository {
    async fn load_deals(&self) -> Result<Vec<Deal>> {
        anyhow::bail!("data source unavailable")
    }
}

#[tokio::test]
async fn test_load_deals_populates_store_with_one_notification() {
    let repository = Arc::new(StaticDealRepository {
        deals: vec![
            Deal::new(Provider::new(1), vec!["Broadband".to_string()]),
            Deal::new(Provider::new(2), vec!["TV".to_string()]),
        ],
    });
    let load_deals = LoadDeals::new(repository);

    let mut store = FilterStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    store.subscribe(move |state: &FilterState| {
        assert_eq!(state.deals().len(), 2);
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let count = load_deals.execute(&mut store).await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(store.deals().len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_load_leaves_store_untouched() {
    let load_deals = LoadDeals::new(Arc::new(FailingDealRepository));

    let mut store = FilterStore::new();
    store.set_deals(vec![Deal::new(Provider::new(7), Vec::new())]);

    let err = load_deals.execute(&mut store).await.unwrap_err();

    assert!(err.to_string().contains("Failed to load deals"));
    assert!(format!("{err:#}").contains("data source unavailable"));
    assert_eq!(store.deals().len(), 1);
}
