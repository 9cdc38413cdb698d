pub mod list;

pub use list::{PaymentFacet, PaymentSortKey};
