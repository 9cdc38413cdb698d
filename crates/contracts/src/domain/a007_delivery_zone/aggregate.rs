use crate::domain::common::Validated;
use serde::{Deserialize, Serialize};

/// Зона доставки с тарифом
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryZone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub fee: f64,
    /// Порог бесплатной доставки
    #[serde(default)]
    pub free_shipping_threshold: Option<f64>,
    #[serde(default)]
    pub estimated_days: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl DeliveryZone {
    /// Стоимость доставки для заказа на сумму `order_total`
    pub fn delivery_fee(&self, order_total: f64) -> f64 {
        match self.free_shipping_threshold {
            Some(threshold) if threshold > 0.0 && order_total >= threshold => 0.0,
            _ => self.fee,
        }
    }
}

impl Validated for DeliveryZone {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Zone id must not be empty".into());
        }
        if self.name.trim().is_empty() {
            return Err("Zone name must not be empty".into());
        }
        if !self.fee.is_finite() || self.fee < 0.0 {
            return Err("Delivery fee must be a non-negative number".into());
        }
        if let Some(t) = self.free_shipping_threshold {
            if !t.is_finite() || t < 0.0 {
                return Err("Free shipping threshold must be a non-negative number".into());
            }
        }
        Ok(())
    }
}
