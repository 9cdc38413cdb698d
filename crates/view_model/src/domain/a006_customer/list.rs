use crate::aggregate::{Metric, Scope};
use crate::list_utils::Listable;
use crate::sort::{SortState, SortValue};
use contracts::domain::a006_customer::Customer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CustomerFacet {
    Role,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerSortKey {
    Name,
    Email,
    Orders,
    TotalSpent,
    CreatedAt,
    LastLogin,
}

impl Listable for Customer {
    type Facet = CustomerFacet;
    type SortKey = CustomerSortKey;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_deref().unwrap_or(""),
        ]
    }

    fn facet_value(&self, facet: CustomerFacet) -> Option<String> {
        match facet {
            CustomerFacet::Role => Some(self.role.code().to_string()),
            CustomerFacet::Active => Some(self.is_active.to_string()),
        }
    }

    fn sort_value(&self, key: CustomerSortKey) -> SortValue {
        match key {
            CustomerSortKey::Name => SortValue::Text(self.name.clone()),
            CustomerSortKey::Email => SortValue::Text(self.email.clone()),
            CustomerSortKey::Orders => SortValue::Number(f64::from(self.orders_count)),
            CustomerSortKey::TotalSpent => SortValue::Number(self.total_spent),
            CustomerSortKey::CreatedAt => SortValue::date(Some(&self.created_at)),
            CustomerSortKey::LastLogin => SortValue::date(self.last_login_at.as_ref()),
        }
    }
}

pub fn default_sort() -> SortState<CustomerSortKey> {
    SortState::ascending(CustomerSortKey::Name)
}

pub fn metrics() -> Vec<Metric<Customer>> {
    vec![
        Metric::count("total", Scope::Full),
        Metric::count_where("active", Scope::Full, |c: &Customer| c.is_active),
        Metric::sum("revenue", Scope::Filtered, |c: &Customer| c.total_spent),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::filter::FilterState;
    use crate::pipeline::{compute_view, ViewState};

    fn customers() -> Vec<Customer> {
        serde_json::from_value(serde_json::json!([
            {"id": "u1", "name": "Anna", "email": "anna@example.com", "ordersCount": 3,
             "totalSpent": 250.0, "createdAt": "2024-06-01T00:00:00Z",
             "lastLoginAt": "2025-03-01T00:00:00Z"},
            {"id": "u2", "name": "Boris", "email": "boris@example.com", "role": "admin",
             "createdAt": "2024-01-01T00:00:00Z"},
            {"id": "u3", "name": "Clara", "email": "clara@example.com", "isActive": false,
             "totalSpent": 40.0, "createdAt": "2024-08-01T00:00:00Z",
             "lastLoginAt": "2024-12-01T00:00:00Z"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_role_facet() {
        let data = customers();
        let filter = FilterState::default().with_selection(CustomerFacet::Role, "customer");
        let sort = default_sort();
        let view = compute_view(
            &ViewState::new(&data, &filter).sorted_by(&sort),
            &metrics(),
            &ViewConfig::default(),
        );
        assert_eq!(view.row_ids(), vec!["u1", "u3"]);
        assert_eq!(view.aggregates.get("active"), Some(2.0));
        assert_eq!(view.aggregates.get("revenue"), Some(290.0));
    }

    #[test]
    fn test_missing_last_login_sorts_first() {
        let data = customers();
        let filter = FilterState::default();
        let sort = SortState::ascending(CustomerSortKey::LastLogin);
        let view = compute_view(&ViewState::new(&data, &filter).sorted_by(&sort), &[], &ViewConfig::default());
        assert_eq!(view.row_ids(), vec!["u2", "u3", "u1"]);
    }
}
