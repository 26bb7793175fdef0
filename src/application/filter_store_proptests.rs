use super::*;
use crate::domain::entities::Provider;
use proptest::prelude::*;

fn product_type_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Broadband", "Fibre Broadband", "TV", "Mobile", "Phone"])
        .prop_map(str::to_string)
}

fn deal_strategy() -> impl Strategy<Value = Deal> {
    (0i64..5, prop::collection::vec(product_type_strategy(), 0..5))
        .prop_map(|(provider, product_types)| Deal::new(Provider::new(provider), product_types))
}

fn deals_strategy() -> impl Strategy<Value = Vec<Deal>> {
    prop::collection::vec(deal_strategy(), 0..12)
}

proptest! {
    #[test]
    fn prop_no_filters_returns_every_deal_in_order(deals in deals_strategy()) {
        let mut store = FilterStore::new();
        store.set_deals(deals.clone());

        let result: Vec<Deal> = store.deals().into_iter().cloned().collect();
        prop_assert_eq!(result, deals);
    }

    #[test]
    fn prop_toggling_twice_restores_filters(
        initial in prop::collection::vec("[a-z]{1,6}", 0..4),
        token in "[ ]{0,2}[A-Za-z]{1,8}[ ]{0,2}"
    ) {
        let mut store = FilterStore::new();
        for existing in &initial {
            if !store.state().product_filters().contains(existing.as_str()) {
                store.set_product_filter(existing);
            }
        }
        let before = store.state().product_filters().clone();

        store.set_product_filter(&token);
        store.set_product_filter(&token);

        prop_assert_eq!(store.state().product_filters(), &before);
    }

    #[test]
    fn prop_provider_filter_admits_only_that_provider(
        deals in deals_strategy(),
        provider in 0i64..5
    ) {
        let mut store = FilterStore::new();
        store.set_deals(deals.clone());
        store.set_provider_filter(Some(ProviderId(provider)));

        let expected: Vec<&Deal> = deals
            .iter()
            .filter(|deal| deal.provider_id() == ProviderId(provider))
            .collect();
        prop_assert_eq!(store.deals(), expected);
    }

    #[test]
    fn prop_visible_deals_match_selection_exactly(
        deals in deals_strategy(),
        selection in prop::collection::btree_set(
            prop::sample::select(vec!["broadband", "tv", "mobile"]),
            1..3
        )
    ) {
        let mut store = FilterStore::new();
        store.set_deals(deals);
        for token in &selection {
            store.set_product_filter(token);
        }

        let wanted: String = selection.iter().copied().collect();
        for deal in store.deals() {
            prop_assert_eq!(ProductSignature::new(&deal.product_types).to_string(), wanted.clone());
        }
    }
}
