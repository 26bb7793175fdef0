use std::collections::BTreeSet;
use std::fmt;

const EXCLUDED_PRODUCT: &str = "Phone";
const FIBRE_BROADBAND: &str = "Fibre Broadband";
const BROADBAND: &str = "broadband";

pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// Empty labels contribute nothing to the concatenated signature.
fn canonical_product(product_type: &str) -> Option<String> {
    match product_type {
        "" | EXCLUDED_PRODUCT => None,
        FIBRE_BROADBAND => Some(BROADBAND.to_string()),
        other => Some(other.to_lowercase()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProductSignature {
    tokens: BTreeSet<String>,
}

impl ProductSignature {
    pub fn new<I, S>(product_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = product_types
            .into_iter()
            .filter_map(|product_type| canonical_product(product_type.as_ref()))
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ProductSignature {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for ProductSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "product_signature_test.rs"]
mod tests;

#[cfg(test)]
#[path = "product_signature_proptests.rs"]
mod proptests;
