use crate::domain::common::Validated;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Бренд одежды
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub product_count: u32,
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl Validated for Brand {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Brand id must not be empty".into());
        }
        if self.name.trim().is_empty() {
            return Err("Brand name must not be empty".into());
        }
        if self.name.len() > 100 {
            return Err("Brand name must not exceed 100 characters".into());
        }
        if let Some(site) = &self.website {
            if !site.is_empty() && !(site.starts_with("http://") || site.starts_with("https://")) {
                return Err(format!("Website must be an http(s) URL: {}", site));
            }
        }
        Ok(())
    }
}
