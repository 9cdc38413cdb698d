use crate::aggregate::{Metric, Scope};
use crate::list_utils::Listable;
use crate::sort::{SortState, SortValue};
use contracts::domain::a007_delivery_zone::DeliveryZone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DeliveryZoneFacet {
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryZoneSortKey {
    Name,
    Fee,
    EstimatedDays,
}

impl Listable for DeliveryZone {
    type Facet = DeliveryZoneFacet;
    type SortKey = DeliveryZoneSortKey;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        std::iter::once(self.name.as_str())
            .chain(self.regions.iter().map(String::as_str))
            .collect()
    }

    fn facet_value(&self, facet: DeliveryZoneFacet) -> Option<String> {
        match facet {
            DeliveryZoneFacet::Active => Some(self.is_active.to_string()),
        }
    }

    fn sort_value(&self, key: DeliveryZoneSortKey) -> SortValue {
        match key {
            DeliveryZoneSortKey::Name => SortValue::Text(self.name.clone()),
            DeliveryZoneSortKey::Fee => SortValue::Number(self.fee),
            DeliveryZoneSortKey::EstimatedDays => {
                SortValue::number(self.estimated_days.map(f64::from))
            }
        }
    }
}

pub fn default_sort() -> SortState<DeliveryZoneSortKey> {
    SortState::ascending(DeliveryZoneSortKey::Name)
}

pub fn metrics() -> Vec<Metric<DeliveryZone>> {
    vec![
        Metric::count("total", Scope::Full),
        Metric::count_where("active", Scope::Full, |z: &DeliveryZone| z.is_active),
    ]
}
