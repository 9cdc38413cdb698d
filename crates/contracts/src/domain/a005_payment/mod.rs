pub mod aggregate;

pub use aggregate::{Payment, PaymentTransaction, TransactionKind};
