use crate::domain::entities::Deal;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DealRepository: Send + Sync {
    async fn load_deals(&self) -> Result<Vec<Deal>>;
}
