use super::*;
use proptest::prelude::*;

fn product_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Broadband".to_string()),
        Just("Fibre Broadband".to_string()),
        Just("TV".to_string()),
        Just("Mobile".to_string()),
        Just("Phone".to_string()),
        "[A-Za-z][A-Za-z ]{0,11}",
    ]
}

proptest! {
    #[test]
    fn prop_signature_ignores_order(
        products in prop::collection::vec(product_type_strategy(), 0..8)
    ) {
        let mut reversed = products.clone();
        reversed.reverse();
        let mut rotated = products.clone();
        if !rotated.is_empty() {
            rotated.rotate_left(1);
        }

        prop_assert_eq!(ProductSignature::new(&products), ProductSignature::new(&reversed));
        prop_assert_eq!(ProductSignature::new(&products), ProductSignature::new(&rotated));
    }

    #[test]
    fn prop_signature_ignores_duplicates(
        products in prop::collection::vec(product_type_strategy(), 1..8),
        pick in any::<prop::sample::Index>()
    ) {
        let mut duplicated = products.clone();
        duplicated.push(products[pick.index(products.len())].clone());

        prop_assert_eq!(
            ProductSignature::new(&products).to_string(),
            ProductSignature::new(&duplicated).to_string()
        );
    }

    #[test]
    fn prop_signature_never_contains_excluded_label(
        products in prop::collection::vec(product_type_strategy(), 0..8)
    ) {
        let signature = ProductSignature::new(&products);
        prop_assert!(signature.tokens().all(|token| token != "Phone"));
        prop_assert!(signature.tokens().all(|token| token != "fibre broadband"));
    }

    #[test]
    fn prop_normalize_token_is_idempotent(raw in "[ \\tA-Za-z]{0,16}") {
        let once = normalize_token(&raw);
        prop_assert_eq!(normalize_token(&once), once.clone());
    }
}
