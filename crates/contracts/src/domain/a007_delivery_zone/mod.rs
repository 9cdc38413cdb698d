pub mod aggregate;

pub use aggregate::DeliveryZone;
