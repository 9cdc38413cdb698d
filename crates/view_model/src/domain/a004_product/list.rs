use crate::aggregate::{Metric, Scope};
use crate::category::{category_ref_path, CategoryLookup};
use crate::config::ViewConfig;
use crate::list_utils::Listable;
use crate::pricing::PriceInput;
use crate::sort::{SortState, SortValue};
use contracts::domain::a004_product::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProductFacet {
    Status,
    Brand,
    /// Полный путь категории
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortKey {
    Name,
    Price,
    Stock,
    Margin,
    CreatedAt,
}

/// Строка таблицы товаров: товар плюс вычисленные поля
#[derive(Debug, Clone)]
pub struct ProductRow<'a> {
    pub product: &'a Product,
    pub category_path: String,
    pub effective_price: f64,
    pub profit: Option<f64>,
    pub margin: Option<f64>,
}

impl<'a> ProductRow<'a> {
    pub fn from_product(
        product: &'a Product,
        categories: &CategoryLookup<'_>,
        config: &ViewConfig,
    ) -> Self {
        let price = PriceInput::from(product);
        let clamp = config.pricing.clamp_percent;
        Self {
            product,
            category_path: category_ref_path(
                &product.category,
                categories,
                &config.category.separator,
            ),
            effective_price: price.effective_price_with(clamp),
            profit: price.profit_with(clamp),
            margin: price.margin_with(clamp),
        }
    }

    /// Стоимость остатка по итоговой цене
    pub fn inventory_value(&self) -> f64 {
        self.effective_price * f64::from(self.product.total_stock())
    }
}

/// Строки для всех товаров в исходном порядке
pub fn build_rows<'a>(
    products: &'a [Product],
    categories: &CategoryLookup<'_>,
    config: &ViewConfig,
) -> Vec<ProductRow<'a>> {
    products
        .iter()
        .map(|p| ProductRow::from_product(p, categories, config))
        .collect()
}

impl Listable for ProductRow<'_> {
    type Facet = ProductFacet;
    type SortKey = ProductSortKey;

    fn record_id(&self) -> &str {
        &self.product.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.product.name.as_str(),
            self.product.sku.as_str(),
            self.product.brand_name(),
            self.category_path.as_str(),
        ];
        fields.extend(self.product.variants.iter().filter_map(|v| v.sku.as_deref()));
        fields
    }

    fn facet_value(&self, facet: ProductFacet) -> Option<String> {
        match facet {
            ProductFacet::Status => Some(self.product.status.code().to_string()),
            ProductFacet::Brand => self.product.brand.clone(),
            ProductFacet::Category => Some(self.category_path.clone()),
        }
    }

    fn sort_value(&self, key: ProductSortKey) -> SortValue {
        match key {
            ProductSortKey::Name => SortValue::Text(self.product.name.clone()),
            ProductSortKey::Price => SortValue::Number(self.effective_price),
            ProductSortKey::Stock => SortValue::Number(f64::from(self.product.total_stock())),
            ProductSortKey::Margin => SortValue::number(self.margin),
            ProductSortKey::CreatedAt => SortValue::date(Some(&self.product.created_at)),
        }
    }
}

pub fn default_sort() -> SortState<ProductSortKey> {
    SortState::descending(ProductSortKey::CreatedAt)
}

pub fn metrics<'a>() -> Vec<Metric<ProductRow<'a>>> {
    vec![
        Metric::count("total", Scope::Full),
        Metric::count("filtered", Scope::Filtered),
        Metric::count_where("out_of_stock", Scope::Full, |r: &ProductRow<'a>| {
            r.product.is_out_of_stock()
        }),
        Metric::sum("inventory_value", Scope::Filtered, |r: &ProductRow<'a>| {
            r.inventory_value()
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::build_lookup;
    use crate::filter::FilterState;
    use crate::pipeline::{compute_view, ViewState};
    use contracts::domain::a003_category::Category;

    fn categories() -> Vec<Category> {
        serde_json::from_value(serde_json::json!([
            {"id": "w", "name": "Women"},
            {"id": "d", "name": "Dresses", "parentId": "w"},
            {"id": "m", "name": "Men"}
        ]))
        .unwrap()
    }

    fn products() -> Vec<Product> {
        serde_json::from_value(serde_json::json!([
            {
                "id": "p1", "name": "Linen dress", "sku": "LD-1", "brand": "Nordic",
                "category": {"id": "d", "name": "Dresses", "parentId": "w"},
                "price": 100.0, "discountPercent": 25.0, "costPrice": 50.0,
                "stock": 2, "status": "active", "createdAt": "2025-01-03T00:00:00Z"
            },
            {
                "id": "p2", "name": "Oxford shirt", "sku": "OS-1", "brand": "Atelier",
                "category": "Men / Shirts",
                "price": 60.0, "discountPrice": 45.0, "costPrice": 36.0,
                "stock": 0, "status": "active", "createdAt": "2025-01-02T00:00:00Z"
            },
            {
                "id": "p3", "name": "Wrap dress", "sku": "WD-1",
                "category": {"id": "d", "name": "Dresses"},
                "price": 80.0, "stock": 0, "status": "draft",
                "variants": [
                    {"id": "v1", "size": "S", "sku": "WD-1-S", "stock": 3},
                    {"id": "v2", "size": "M", "sku": "WD-1-M", "stock": 1}
                ],
                "createdAt": "2025-01-01T00:00:00Z"
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_rows_compute_price_and_category() {
        let cats = categories();
        let lookup = build_lookup(&cats);
        let items = products();
        let rows = build_rows(&items, &lookup, &ViewConfig::default());

        assert_eq!(rows[0].category_path, "Women / Dresses");
        assert_eq!(rows[0].effective_price, 75.0);
        assert_eq!(rows[0].profit, Some(25.0));
        assert_eq!(rows[1].category_path, "Men / Shirts");
        assert_eq!(rows[1].effective_price, 45.0);
        assert_eq!(rows[2].category_path, "Women / Dresses");
        assert_eq!(rows[2].margin, None);
        assert_eq!(rows[2].inventory_value(), 320.0);
    }

    #[test]
    fn test_category_facet_and_variant_sku_search() {
        let cats = categories();
        let lookup = build_lookup(&cats);
        let items = products();
        let rows = build_rows(&items, &lookup, &ViewConfig::default());

        let filter = FilterState::default().with_selection(ProductFacet::Category, "Women / Dresses");
        let view = compute_view(&ViewState::new(&rows, &filter), &metrics(), &ViewConfig::default());
        assert_eq!(view.row_ids(), vec!["p1", "p3"]);
        assert_eq!(view.aggregates.get("out_of_stock"), Some(1.0));
        assert_eq!(view.aggregates.get("inventory_value"), Some(150.0 + 320.0));

        let filter = FilterState::default().with_search("wd-1-m");
        let view = compute_view(&ViewState::new(&rows, &filter), &[], &ViewConfig::default());
        assert_eq!(view.row_ids(), vec!["p3"]);
    }

    #[test]
    fn test_sort_by_effective_price_and_margin() {
        let cats = categories();
        let lookup = build_lookup(&cats);
        let items = products();
        let rows = build_rows(&items, &lookup, &ViewConfig::default());
        let filter = FilterState::default();

        let sort = SortState::ascending(ProductSortKey::Price);
        let view = compute_view(&ViewState::new(&rows, &filter).sorted_by(&sort), &[], &ViewConfig::default());
        assert_eq!(view.row_ids(), vec!["p2", "p1", "p3"]);

        // Без маржи — как 0, в конце при сортировке по убыванию
        let sort = SortState::descending(ProductSortKey::Margin);
        let view = compute_view(&ViewState::new(&rows, &filter).sorted_by(&sort), &[], &ViewConfig::default());
        assert_eq!(view.row_ids(), vec!["p1", "p2", "p3"]);
    }
}
