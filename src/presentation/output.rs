use crate::domain::entities::Deal;
use anyhow::{Context, Result};

pub fn render_deals(deals: &[&Deal]) -> Result<String> {
    serde_json::to_string_pretty(deals).context("Failed to serialize deals")
}
