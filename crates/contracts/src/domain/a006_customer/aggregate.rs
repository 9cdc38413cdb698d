use crate::domain::common::{looks_like_email, Validated};
use crate::enums::UserRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Пользователь/клиент магазина
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub orders_count: u32,
    #[serde(default)]
    pub total_spent: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Validated for Customer {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("User id must not be empty".into());
        }
        if !looks_like_email(&self.email) {
            return Err(format!("Invalid email: {}", self.email));
        }
        if !self.total_spent.is_finite() || self.total_spent < 0.0 {
            return Err("Total spent must be a non-negative number".into());
        }
        Ok(())
    }
}
