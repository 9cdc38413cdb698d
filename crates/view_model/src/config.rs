use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ViewConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub category: CategoryConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Поиск короче этого числа символов считается пустым
    #[serde(default)]
    pub min_chars: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CategoryConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PricingConfig {
    /// Ограничивать процент скидки диапазоном 0..=100 при расчёте цены
    #[serde(default = "default_true")]
    pub clamp_percent: bool,
}

fn default_page_size() -> usize {
    50
}

fn default_separator() -> String {
    crate::category::DEFAULT_SEPARATOR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { min_chars: 0 }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            clamp_percent: true,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            pagination: PaginationConfig::default(),
            category: CategoryConfig::default(),
            pricing: PricingConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Value(String),
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[search]
min_chars = 0

[pagination]
page_size = 50

[category]
separator = " / "

[pricing]
clamp_percent = true
"#;

/// Parse configuration text and check the values
pub fn parse_config(contents: &str) -> Result<ViewConfig, ConfigError> {
    let config: ViewConfig = toml::from_str(contents)?;
    if config.pagination.page_size == 0 {
        return Err(ConfigError::Value("pagination.page_size must be positive".into()));
    }
    if config.category.separator.is_empty() {
        return Err(ConfigError::Value("category.separator must not be empty".into()));
    }
    Ok(config)
}

/// Load configuration from a TOML file
///
/// Falls back to the embedded default config when the file does not exist.
pub fn load_config_from(path: &Path) -> Result<ViewConfig, ConfigError> {
    if path.exists() {
        log::info!("Loading view config from: {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        return parse_config(&contents);
    }

    log::warn!("view config not found at: {}", path.display());
    log::info!("Using default embedded view configuration");
    parse_config(DEFAULT_CONFIG)
}
