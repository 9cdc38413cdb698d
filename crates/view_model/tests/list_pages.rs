use contracts::decode_list;
use contracts::domain::a001_booking::Booking;
use contracts::domain::a003_category::Category;
use contracts::domain::a004_product::Product;
use view_model::category::build_lookup;
use view_model::domain::a001_booking::{list as bookings, BookingFacet, BookingSortKey};
use view_model::domain::a004_product::{list as products, ProductFacet, ProductSortKey};
use view_model::{compute_view, parse_config, FilterState, PageRequest, SortState, ViewState, ALL};

fn bookings_payload() -> String {
    serde_json::json!({
        "data": [
            {"id": "b1", "customerName": "Anna Petrova", "customerEmail": "anna@example.com",
             "eventType": "fitting", "eventDate": "2025-03-10", "status": "confirmed",
             "paymentStatus": "paid", "price": 10.0, "createdAt": "2025-02-01T09:00:00Z"},
            {"id": "b2", "customerName": "Boris Ivanov", "customerEmail": "boris@example.com",
             "eventType": "styling", "eventDate": "2025-03-12", "status": "pending",
             "paymentStatus": "pending", "price": 5.0, "createdAt": "2025-02-02T09:00:00Z"},
            {"id": "b3", "customerName": "Clara Smith", "customerEmail": "clara@example.com",
             "eventType": "fitting", "eventDate": "2025-03-10", "status": "confirmed",
             "paymentStatus": "paid", "price": 20.0, "createdAt": "2025-02-03T09:00:00Z"},
            {"id": "b4", "customerName": "Anna Lee", "customerEmail": "lee@example.com",
             "eventType": "private_event", "eventDate": "2025-01-20", "status": "completed",
             "paymentStatus": "paid", "price": 300.0, "createdAt": "2025-01-03T09:00:00Z"}
        ],
        "total": 4
    })
    .to_string()
}

#[test]
fn bookings_page_end_to_end() {
    let records: Vec<Booking> = decode_list(&bookings_payload()).unwrap();
    let config = parse_config("[pagination]\npage_size = 2\n").unwrap();

    let filter = FilterState::default()
        .with_selection(BookingFacet::Status, "confirmed")
        .with_selection(BookingFacet::EventType, ALL);
    let sort = SortState::ascending(BookingSortKey::EventDate);
    let state = ViewState::new(&records, &filter)
        .sorted_by(&sort)
        .on_page(PageRequest::first(config.pagination.page_size));
    let view = compute_view(&state, &bookings::metrics(), &config);

    // b1 и b3 в один день: остаются в исходном порядке
    assert_eq!(view.row_ids(), vec!["b1", "b3"]);
    assert_eq!(view.filtered_count, 2);
    assert_eq!(view.page.unwrap().total_pages, 1);
    assert_eq!(view.aggregates.get("total"), Some(4.0));
    assert_eq!(view.aggregates.get("paid_revenue"), Some(30.0));
}

#[test]
fn reversing_ascending_equals_descending() {
    let records: Vec<Booking> = decode_list(&bookings_payload()).unwrap();
    let filter = FilterState::default();
    let config = parse_config("").unwrap();

    let asc = SortState::ascending(BookingSortKey::Price);
    let desc = SortState::descending(BookingSortKey::Price);
    let mut forward = compute_view(&ViewState::new(&records, &filter).sorted_by(&asc), &[], &config).row_ids();
    forward.reverse();
    let backward = compute_view(&ViewState::new(&records, &filter).sorted_by(&desc), &[], &config).row_ids();
    assert_eq!(forward, backward);
}

#[test]
fn search_matches_substring_of_any_field() {
    let records: Vec<Booking> = decode_list(&bookings_payload()).unwrap();
    let config = parse_config("").unwrap();
    for (needle, expected) in [("anna", vec!["b1", "b4"]), ("EXAMPLE.COM", vec!["b1", "b2", "b3", "b4"]), ("styl", vec!["b2"])] {
        let filter = FilterState::<BookingFacet>::default().with_search(needle);
        let view = compute_view(&ViewState::new(&records, &filter), &[], &config);
        assert_eq!(view.row_ids(), expected, "search {needle:?}");
    }
}

#[test]
fn invalid_booking_rejected_at_boundary() {
    let payload = r#"[{"id": "b9", "customerName": "X", "customerEmail": "not-an-email",
        "eventType": "fitting", "eventDate": "2025-01-01", "status": "pending",
        "createdAt": "2025-01-01T00:00:00Z"}]"#;
    let err = decode_list::<Booking>(payload).unwrap_err();
    assert!(err.to_string().contains("b9"));
}

#[test]
fn products_page_with_mixed_category_shapes() {
    let categories: Vec<Category> = decode_list(
        r#"[{"id": "w", "name": "Women"},
            {"id": "d", "name": "Dresses", "parentId": "w"},
            {"id": "x", "name": "Orphan", "parentId": "gone"}]"#,
    )
    .unwrap();
    let items: Vec<Product> = decode_list(
        r#"[{"id": "p1", "name": "Linen dress", "category": {"id": "d", "name": "Dresses"},
             "price": 100.0, "discountPrice": 80.0, "costPrice": 60.0, "stock": 1,
             "status": "active", "createdAt": "2025-01-01T00:00:00Z"},
            {"id": "p2", "name": "Scarf", "category": "Accessories", "price": 30.0,
             "status": "active", "createdAt": "2025-01-02T00:00:00Z"},
            {"id": "p3", "name": "Odd item", "category": {"id": "x", "name": "Orphan"},
             "price": 10.0, "status": "draft", "createdAt": "2025-01-03T00:00:00Z"}]"#,
    )
    .unwrap();

    let config = parse_config("[category]\nseparator = \" > \"\n").unwrap();
    let lookup = build_lookup(&categories);
    let rows = products::build_rows(&items, &lookup, &config);
    assert_eq!(rows[0].category_path, "Women > Dresses");
    assert_eq!(rows[1].category_path, "Accessories");
    assert_eq!(rows[2].category_path, "Orphan");

    let filter = FilterState::default().with_selection(ProductFacet::Status, "active");
    let sort = SortState::descending(ProductSortKey::Price);
    let view = compute_view(&ViewState::new(&rows, &filter).sorted_by(&sort), &products::metrics(), &config);
    assert_eq!(view.row_ids(), vec!["p1", "p2"]);
    assert_eq!(view.aggregates.get("out_of_stock"), Some(2.0));
    assert_eq!(view.aggregates.get("inventory_value"), Some(80.0));
}
