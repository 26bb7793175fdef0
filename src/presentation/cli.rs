use crate::application::{FilterStore, UseCaseContainer};
use crate::domain::entities::ProviderId;
use crate::infrastructure::{ConfigRepository, JsonDealRepository};
use crate::presentation::{log_notification, render_deals};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "deal-filter")]
#[command(about = "Filter deals by provider and product type", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/deal-filter/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Deal data file, overrides the configured one
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Only show deals from this provider id
    #[arg(long)]
    pub provider: Option<i64>,

    /// Toggle a product type filter; repeat to select several
    #[arg(long = "product", value_name = "PRODUCT")]
    pub products: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Loads the deals, applies the requested filters and returns the visible
/// deals rendered as JSON.
pub async fn run(cli: Cli) -> Result<String> {
    let config_repository = match cli.config {
        Some(path) => ConfigRepository::with_path(path),
        None => ConfigRepository::new(),
    };
    let config = config_repository.load()?;
    let data_path = cli.data.unwrap_or(config.data_path);

    let use_cases = UseCaseContainer::new(Arc::new(JsonDealRepository::new(data_path)));

    let mut store = FilterStore::new();
    if config.log_notifications {
        store.subscribe(log_notification);
    }

    use_cases.load_deals.execute(&mut store).await?;

    if let Some(provider) = cli.provider {
        store.set_provider_filter(Some(ProviderId(provider)));
    }
    for product in &cli.products {
        store.set_product_filter(product);
    }

    let visible = store.deals();
    if visible.is_empty() {
        tracing::warn!("No deals match the selected filters");
    } else {
        tracing::info!("{} of {} deals match", visible.len(), store.state().deals().len());
    }

    render_deals(&visible)
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
