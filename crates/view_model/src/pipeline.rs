//! Конвейер списка: фильтр → сортировка → итоги → страница.
//!
//! `compute_view` — чистая функция состояния страницы. Её вызывают заново при
//! каждом изменении записей, фильтра, сортировки или страницы.

use crate::aggregate::{compute_aggregates, Aggregates, Metric};
use crate::config::ViewConfig;
use crate::filter::{filter_records, FilterState};
use crate::list_utils::Listable;
use crate::pagination::{paginate, PageInfo, PageRequest};
use crate::sort::{sort_records, SortState};

/// Полное состояние страницы-списка
pub struct ViewState<'a, T: Listable> {
    pub records: &'a [T],
    pub filter: &'a FilterState<T::Facet>,
    pub sort: Option<&'a SortState<T::SortKey>>,
    pub page: Option<PageRequest>,
}

impl<'a, T: Listable> ViewState<'a, T> {
    pub fn new(records: &'a [T], filter: &'a FilterState<T::Facet>) -> Self {
        Self {
            records,
            filter,
            sort: None,
            page: None,
        }
    }

    pub fn sorted_by(mut self, sort: &'a SortState<T::SortKey>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn on_page(mut self, page: PageRequest) -> Self {
        self.page = Some(page);
        self
    }
}

/// Результат для отрисовки
#[derive(Debug)]
pub struct View<'a, T> {
    /// Строки текущей страницы (или все строки без пагинации)
    pub rows: Vec<&'a T>,
    pub total_count: usize,
    pub filtered_count: usize,
    pub page: Option<PageInfo>,
    pub aggregates: Aggregates,
}

impl<'a, T: Listable> View<'a, T> {
    pub fn row_ids(&self) -> Vec<&'a str> {
        self.rows.iter().map(|r| r.record_id()).collect()
    }
}

pub fn compute_view<'a, T: Listable>(
    state: &ViewState<'a, T>,
    metrics: &[Metric<T>],
    config: &ViewConfig,
) -> View<'a, T> {
    let mut rows = filter_records(state.records, state.filter, config.search.min_chars);

    if let Some(sort) = state.sort {
        sort_records(&mut rows, sort);
    }

    let aggregates = compute_aggregates(state.records, &rows, metrics);
    let filtered_count = rows.len();

    let (rows, page) = match state.page {
        Some(request) => {
            let (page_rows, info) = paginate(&rows, request);
            (page_rows, Some(info))
        }
        None => (rows, None),
    };

    log::debug!(
        "view recomputed: {} total, {} filtered, {} shown",
        state.records.len(),
        filtered_count,
        rows.len()
    );

    View {
        rows,
        total_count: state.records.len(),
        filtered_count,
        page,
        aggregates,
    }
}
