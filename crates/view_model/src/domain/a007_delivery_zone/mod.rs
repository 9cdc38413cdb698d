pub mod list;

pub use list::{DeliveryZoneFacet, DeliveryZoneSortKey};
