use crate::aggregate::{Metric, Scope};
use crate::list_utils::Listable;
use crate::sort::{SortState, SortValue};
use contracts::domain::a005_payment::Payment;
use contracts::enums::PaymentStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PaymentFacet {
    Status,
    Method,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentSortKey {
    CreatedAt,
    Amount,
    Status,
}

impl Listable for Payment {
    type Facet = PaymentFacet;
    type SortKey = PaymentSortKey;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.id.as_str(),
            self.customer_email.as_str(),
            self.booking_id.as_deref().unwrap_or(""),
        ];
        fields.extend(self.transactions.iter().map(|t| t.id.as_str()));
        fields
    }

    fn facet_value(&self, facet: PaymentFacet) -> Option<String> {
        match facet {
            PaymentFacet::Status => Some(self.status.code().to_string()),
            PaymentFacet::Method => Some(self.method.code().to_string()),
        }
    }

    fn sort_value(&self, key: PaymentSortKey) -> SortValue {
        match key {
            PaymentSortKey::CreatedAt => SortValue::date(Some(&self.created_at)),
            PaymentSortKey::Amount => SortValue::Number(self.net_amount()),
            PaymentSortKey::Status => SortValue::Text(self.status.code().to_string()),
        }
    }
}

pub fn default_sort() -> SortState<PaymentSortKey> {
    SortState::descending(PaymentSortKey::CreatedAt)
}

pub fn metrics() -> Vec<Metric<Payment>> {
    vec![
        Metric::count("total", Scope::Full),
        Metric::count_where("paid", Scope::Filtered, |p: &Payment| {
            p.status == PaymentStatus::Paid
        }),
        Metric::sum_where(
            "collected",
            Scope::Filtered,
            |p: &Payment| p.net_amount(),
            |p: &Payment| p.status == PaymentStatus::Paid,
        ),
        Metric::sum("refunded", Scope::Filtered, |p: &Payment| p.refunded()),
    ]
}
