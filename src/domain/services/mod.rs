pub mod product_signature;

pub use product_signature::{normalize_token, ProductSignature};
