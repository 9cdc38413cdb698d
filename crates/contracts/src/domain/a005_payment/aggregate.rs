use crate::domain::common::{looks_like_email, Validated};
use crate::enums::{PaymentMethod, PaymentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Вид движения по платежу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Charge,
    Refund,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Платёж клиента с историей транзакций
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    #[serde(default)]
    pub booking_id: Option<String>,
    pub customer_email: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub transactions: Vec<PaymentTransaction>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn charged(&self) -> f64 {
        self.sum_of(TransactionKind::Charge)
    }

    pub fn refunded(&self) -> f64 {
        self.sum_of(TransactionKind::Refund)
    }

    /// Итог по транзакциям: списания минус возвраты.
    /// Без транзакций — сумма платежа.
    pub fn net_amount(&self) -> f64 {
        if self.transactions.is_empty() {
            self.amount
        } else {
            self.charged() - self.refunded()
        }
    }

    fn sum_of(&self, kind: TransactionKind) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind && t.amount.is_finite())
            .map(|t| t.amount)
            .sum()
    }
}

impl Validated for Payment {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Payment id must not be empty".into());
        }
        if !looks_like_email(&self.customer_email) {
            return Err(format!("Invalid customer email: {}", self.customer_email));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err("Amount must be a non-negative number".into());
        }
        if let Some(t) = self
            .transactions
            .iter()
            .find(|t| !t.amount.is_finite() || t.amount < 0.0)
        {
            return Err(format!("Transaction {} has an invalid amount", t.id));
        }
        Ok(())
    }
}
