use crate::aggregate::{Metric, Scope};
use crate::list_utils::Listable;
use crate::sort::{SortState, SortValue};
use contracts::domain::a002_brand::Brand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BrandFacet {
    /// "true" / "false"
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandSortKey {
    Name,
    ProductCount,
    CreatedAt,
}

impl Listable for Brand {
    type Facet = BrandFacet;
    type SortKey = BrandSortKey;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.slug.as_str()]
    }

    fn facet_value(&self, facet: BrandFacet) -> Option<String> {
        match facet {
            BrandFacet::Active => Some(self.is_active.to_string()),
        }
    }

    fn sort_value(&self, key: BrandSortKey) -> SortValue {
        match key {
            BrandSortKey::Name => SortValue::Text(self.name.clone()),
            BrandSortKey::ProductCount => SortValue::Number(f64::from(self.product_count)),
            BrandSortKey::CreatedAt => SortValue::date(Some(&self.created_at)),
        }
    }
}

pub fn default_sort() -> SortState<BrandSortKey> {
    SortState::ascending(BrandSortKey::Name)
}

pub fn metrics() -> Vec<Metric<Brand>> {
    vec![
        Metric::count("total", Scope::Full),
        Metric::count_where("active", Scope::Full, |b: &Brand| b.is_active),
        Metric::sum("products", Scope::Filtered, |b: &Brand| f64::from(b.product_count)),
    ]
}
