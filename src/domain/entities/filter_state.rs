use super::{Deal, ProviderId};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    deals: Vec<Deal>,
    product_filters: BTreeSet<String>,
    provider_filter: Option<ProviderId>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn set_deals(&mut self, deals: Vec<Deal>) {
        self.deals = deals;
    }

    pub fn product_filters(&self) -> &BTreeSet<String> {
        &self.product_filters
    }

    /// Flips membership of an already normalized token. Returns `true` when
    /// the token is active afterwards.
    pub fn toggle_product_filter(&mut self, token: String) -> bool {
        if self.product_filters.contains(&token) {
            self.product_filters.remove(&token);
            false
        } else {
            self.product_filters.insert(token);
            true
        }
    }

    pub fn has_product_filters(&self) -> bool {
        !self.product_filters.is_empty()
    }

    pub fn provider_filter(&self) -> Option<ProviderId> {
        self.provider_filter
    }

    pub fn set_provider_filter(&mut self, provider: Option<ProviderId>) {
        self.provider_filter = provider;
    }

    pub fn has_provider_filter(&self) -> bool {
        self.provider_filter.is_some()
    }
}
