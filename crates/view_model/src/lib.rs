//! Конвейер страниц-списков админ-панели: фильтр, сортировка, итоги,
//! пагинация, а также расчёт цен и путей категорий.

pub mod aggregate;
pub mod category;
pub mod config;
pub mod dashboards;
pub mod domain;
pub mod filter;
pub mod list_utils;
pub mod pagination;
pub mod pipeline;
pub mod pricing;
pub mod sort;

pub use aggregate::{Aggregates, Metric, Scope};
pub use config::{load_config_from, parse_config, ConfigError, ViewConfig};
pub use filter::{FilterState, ALL};
pub use list_utils::Listable;
pub use pagination::{PageInfo, PageRequest};
pub use pipeline::{compute_view, View, ViewState};
pub use sort::{SortDirection, SortState, SortValue};
