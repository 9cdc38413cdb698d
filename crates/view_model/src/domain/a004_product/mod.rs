pub mod list;

pub use list::{ProductFacet, ProductRow, ProductSortKey};
