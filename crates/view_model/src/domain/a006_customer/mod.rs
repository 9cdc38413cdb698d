pub mod list;

pub use list::{CustomerFacet, CustomerSortKey};
