use crate::aggregate::{Metric, Scope};
use crate::list_utils::Listable;
use crate::sort::{SortState, SortValue};
use contracts::domain::a001_booking::Booking;
use contracts::enums::{BookingStatus, PaymentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookingFacet {
    Status,
    PaymentStatus,
    EventType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingSortKey {
    EventDate,
    Customer,
    Price,
    Status,
    CreatedAt,
}

impl Listable for Booking {
    type Facet = BookingFacet;
    type SortKey = BookingSortKey;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.customer_name.as_str(),
            self.customer_email.as_str(),
            self.event_type.as_str(),
            self.customer_phone.as_deref().unwrap_or(""),
        ]
    }

    fn facet_value(&self, facet: BookingFacet) -> Option<String> {
        match facet {
            BookingFacet::Status => Some(self.status.code().to_string()),
            BookingFacet::PaymentStatus => Some(self.payment_status.code().to_string()),
            BookingFacet::EventType => Some(self.event_type.clone()),
        }
    }

    fn sort_value(&self, key: BookingSortKey) -> SortValue {
        match key {
            BookingSortKey::EventDate => SortValue::naive_date(self.event_date),
            BookingSortKey::Customer => SortValue::Text(self.customer_name.clone()),
            BookingSortKey::Price => SortValue::Number(self.price),
            BookingSortKey::Status => SortValue::Text(self.status.code().to_string()),
            BookingSortKey::CreatedAt => SortValue::date(Some(&self.created_at)),
        }
    }
}

/// Ближайшие мероприятия сверху
pub fn default_sort() -> SortState<BookingSortKey> {
    SortState::descending(BookingSortKey::EventDate)
}

/// Карточки над таблицей бронирований
pub fn metrics() -> Vec<Metric<Booking>> {
    vec![
        Metric::count("total", Scope::Full),
        Metric::count("filtered", Scope::Filtered),
        Metric::count_where("pending", Scope::Full, |b: &Booking| {
            b.status == BookingStatus::Pending
        }),
        Metric::count_where("open", Scope::Full, |b: &Booking| b.is_open()),
        Metric::count_where("confirmed", Scope::Filtered, |b: &Booking| {
            b.status == BookingStatus::Confirmed
        }),
        Metric::sum_where(
            "paid_revenue",
            Scope::Filtered,
            |b: &Booking| b.price,
            |b: &Booking| b.payment_status == PaymentStatus::Paid,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::filter::FilterState;
    use crate::pipeline::{compute_view, ViewState};

    fn booking(id: &str, name: &str, date: &str, status: &str, paid: &str, price: f64) -> Booking {
        let event_type = if price > 50.0 { "private_event" } else { "fitting" };
        serde_json::from_value(serde_json::json!({
            "id": id,
            "customerName": name,
            "customerEmail": format!("{}@example.com", name.to_lowercase()),
            "eventType": event_type,
            "eventDate": date,
            "status": status,
            "paymentStatus": paid,
            "price": price,
            "createdAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    fn bookings() -> Vec<Booking> {
        vec![
            booking("b1", "Anna", "2025-03-10", "confirmed", "paid", 10.0),
            booking("b2", "Boris", "2025-03-12", "pending", "pending", 5.0),
            booking("b3", "Clara", "2025-02-01", "confirmed", "paid", 20.0),
            booking("b4", "Dmitri", "2025-04-01", "cancelled", "refunded", 80.0),
        ]
    }

    #[test]
    fn test_default_view() {
        let data = bookings();
        let filter = FilterState::default();
        let sort = default_sort();
        let view = compute_view(
            &ViewState::new(&data, &filter).sorted_by(&sort),
            &metrics(),
            &ViewConfig::default(),
        );
        assert_eq!(view.row_ids(), vec!["b4", "b2", "b1", "b3"]);
        assert_eq!(view.aggregates.get("total"), Some(4.0));
        assert_eq!(view.aggregates.get("pending"), Some(1.0));
        assert_eq!(view.aggregates.get("open"), Some(3.0));
        assert_eq!(view.aggregates.get("confirmed"), Some(2.0));
        assert_eq!(view.aggregates.get("paid_revenue"), Some(30.0));
    }

    #[test]
    fn test_status_facet_and_search() {
        let data = bookings();
        let filter = FilterState::default()
            .with_selection(BookingFacet::Status, "confirmed")
            .with_search("clara@");
        let view = compute_view(&ViewState::new(&data, &filter), &metrics(), &ViewConfig::default());
        assert_eq!(view.row_ids(), vec!["b3"]);
        assert_eq!(view.aggregates.get("total"), Some(4.0));
        assert_eq!(view.aggregates.get("filtered"), Some(1.0));
        assert_eq!(view.aggregates.get("paid_revenue"), Some(20.0));
    }

    #[test]
    fn test_event_type_facet() {
        let data = bookings();
        let filter = FilterState::default().with_selection(BookingFacet::EventType, "private_event");
        let view = compute_view(&ViewState::new(&data, &filter), &[], &ViewConfig::default());
        assert_eq!(view.row_ids(), vec!["b4"]);
    }
}
