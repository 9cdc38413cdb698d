pub mod aggregate;

pub use aggregate::{Product, ProductVariant};
