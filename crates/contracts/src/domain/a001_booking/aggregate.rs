use crate::domain::common::{looks_like_email, Validated};
use crate::enums::{BookingStatus, PaymentStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Бронирование (примерка, персональный шопинг, частное мероприятие)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,

    pub customer_name: String,

    pub customer_email: String,

    #[serde(default)]
    pub customer_phone: Option<String>,

    /// Тип события ("fitting", "styling", "private_event", ...)
    pub event_type: String,

    pub event_date: NaiveDate,

    pub status: BookingStatus,

    #[serde(default = "default_payment_status")]
    pub payment_status: PaymentStatus,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub guests: Option<u32>,

    pub created_at: DateTime<Utc>,
}

fn default_payment_status() -> PaymentStatus {
    PaymentStatus::Pending
}

impl Booking {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    /// Бронирование ещё можно изменить (не завершено и не отменено)
    pub fn is_open(&self) -> bool {
        matches!(self.status, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

impl Validated for Booking {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Booking id must not be empty".into());
        }
        if self.customer_name.trim().is_empty() {
            return Err("Customer name must not be empty".into());
        }
        if !looks_like_email(&self.customer_email) {
            return Err(format!("Invalid customer email: {}", self.customer_email));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be a non-negative number".into());
        }
        Ok(())
    }
}
