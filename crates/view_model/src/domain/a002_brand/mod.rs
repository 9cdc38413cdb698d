pub mod list;

pub use list::{BrandFacet, BrandSortKey};
