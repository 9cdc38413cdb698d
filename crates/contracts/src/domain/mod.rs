pub mod common;

pub mod a001_booking;
pub mod a002_brand;
pub mod a003_category;
pub mod a004_product;
pub mod a005_payment;
pub mod a006_customer;
pub mod a007_delivery_zone;
