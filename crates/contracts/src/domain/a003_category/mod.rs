pub mod aggregate;

pub use aggregate::{Category, CategoryRef};
