use crate::domain::a003_category::CategoryRef;
use crate::domain::common::Validated;
use crate::enums::ProductStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Variant
// ============================================================================

/// Вариант товара (размер/цвет)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub stock: u32,
    /// Собственная цена варианта; если не задана — цена товара
    #[serde(default)]
    pub price: Option<f64>,
}

impl ProductVariant {
    /// Подпись варианта: "M / Black"
    pub fn label(&self) -> String {
        [self.size.as_deref(), self.color.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: CategoryRef,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub discount_percent: Option<f64>,
    #[serde(default)]
    pub cost_price: Option<f64>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default = "default_status")]
    pub status: ProductStatus,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    pub created_at: DateTime<Utc>,
}

fn default_status() -> ProductStatus {
    ProductStatus::Draft
}

impl Product {
    /// Остаток: собственный, либо сумма по вариантам, если они есть.
    /// Сумма по вариантам насыщается на `u32::MAX`.
    pub fn total_stock(&self) -> u32 {
        if self.variants.is_empty() {
            self.stock
        } else {
            self.variants
                .iter()
                .map(|v| v.stock)
                .fold(0u32, u32::saturating_add)
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.total_stock() == 0
    }

    pub fn brand_name(&self) -> &str {
        self.brand.as_deref().unwrap_or("")
    }
}

impl Validated for Product {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Product id must not be empty".into());
        }
        if self.name.trim().is_empty() {
            return Err("Product name must not be empty".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be a non-negative number".into());
        }
        if let Some(dp) = self.discount_price {
            if !dp.is_finite() || dp < 0.0 {
                return Err("Discount price must be a non-negative number".into());
            }
        }
        if let Some(pct) = self.discount_percent {
            if !(0.0..=100.0).contains(&pct) {
                return Err(format!("Discount percent must be within 0..100, got {}", pct));
            }
        }
        if let Some(cost) = self.cost_price {
            if !cost.is_finite() || cost < 0.0 {
                return Err("Cost price must be a non-negative number".into());
            }
        }
        for v in &self.variants {
            if v.id.trim().is_empty() {
                return Err("Variant id must not be empty".into());
            }
            if let Some(p) = v.price {
                if !p.is_finite() || p < 0.0 {
                    return Err(format!("Variant {} has a negative price", v.id));
                }
            }
        }
        Ok(())
    }
}
