pub mod list;

pub use list::{BookingFacet, BookingSortKey};
