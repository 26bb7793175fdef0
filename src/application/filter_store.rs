use crate::application::event_bus::{EventBus, SubscriptionId};
use crate::domain::entities::{Deal, FilterState, ProviderId};
use crate::domain::services::{normalize_token, ProductSignature};

/// Every mutator publishes the post-mutation state exactly once.
pub struct FilterStore {
    state: FilterState,
    events: EventBus<FilterState>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::with_event_bus(EventBus::new())
    }

    pub fn with_event_bus(events: EventBus<FilterState>) -> Self {
        Self {
            state: FilterState::new(),
            events,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&FilterState) + Send + Sync + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn set_deals(&mut self, deals: Vec<Deal>) {
        tracing::debug!("Replacing deal list with {} deals", deals.len());
        self.state.set_deals(deals);
        self.notify();
    }

    /// Overwrites the provider criterion; `None` lifts the restriction.
    pub fn set_provider_filter(&mut self, provider: Option<ProviderId>) {
        match provider {
            Some(id) => tracing::debug!("Provider filter set to {}", id),
            None => tracing::debug!("Provider filter cleared"),
        }
        self.state.set_provider_filter(provider);
        self.notify();
    }

    pub fn clear_provider_filter(&mut self) {
        self.set_provider_filter(None);
    }

    pub fn set_product_filter(&mut self, token: &str) {
        let token = normalize_token(token);
        let active = self.state.toggle_product_filter(token.clone());
        tracing::debug!(
            "Product filter '{}' {}",
            token,
            if active { "enabled" } else { "disabled" }
        );
        self.notify();
    }

    /// Deals passing both the provider and the product criteria, in list order.
    pub fn deals(&self) -> Vec<&Deal> {
        let selection = self.selected_signature();
        self.state
            .deals()
            .iter()
            .filter(|deal| {
                self.matches_provider(deal) && Self::matches_products(deal, selection.as_ref())
            })
            .collect()
    }

    pub fn matches(&self, deal: &Deal) -> bool {
        let selection = self.selected_signature();
        self.matches_provider(deal) && Self::matches_products(deal, selection.as_ref())
    }

    pub fn matches_provider(&self, deal: &Deal) -> bool {
        match self.state.provider_filter() {
            Some(provider) => deal.provider_id() == provider,
            None => true,
        }
    }

    fn selected_signature(&self) -> Option<ProductSignature> {
        self.state
            .has_product_filters()
            .then(|| ProductSignature::new(self.state.product_filters()))
    }

    fn matches_products(deal: &Deal, selection: Option<&ProductSignature>) -> bool {
        match selection {
            Some(selection) => ProductSignature::new(&deal.product_types) == *selection,
            None => true,
        }
    }

    fn notify(&self) {
        let delivered = self.events.publish(&self.state);
        tracing::debug!("Filter state published to {} listeners", delivered);
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "filter_store_test.rs"]
mod tests;

#[cfg(test)]
#[path = "filter_store_proptests.rs"]
mod proptests;
