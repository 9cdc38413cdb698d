//! Фильтр списка: текстовый поиск плюс фасеты.

use crate::list_utils::Listable;
use std::collections::BTreeMap;

/// Значение фасета "показать всё"
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<F: Ord> {
    pub search_text: String,
    pub selections: BTreeMap<F, String>,
}

impl<F: Ord> Default for FilterState<F> {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selections: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FilterState<F> {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_selection(mut self, facet: F, value: impl Into<String>) -> Self {
        self.selections.insert(facet, value.into());
        self
    }

    /// Сбросить поиск и все фасеты
    pub fn clear(&mut self) {
        self.search_text.clear();
        self.selections.clear();
    }

    /// Выбор по фасету, если он не равен "all"
    pub fn active_selection(&self, facet: F) -> Option<&str> {
        self.selections
            .get(&facet)
            .map(String::as_str)
            .filter(|v| !is_all(v))
    }

    /// Поисковая строка с учётом минимальной длины; `None` — поиск не активен
    pub fn effective_search(&self, min_chars: usize) -> Option<String> {
        let text = self.search_text.trim();
        if text.is_empty() || text.chars().count() < min_chars {
            None
        } else {
            Some(text.to_lowercase())
        }
    }

    pub fn is_active(&self, min_chars: usize) -> bool {
        self.effective_search(min_chars).is_some()
            || self
                .selections
                .keys()
                .any(|facet| self.active_selection(*facet).is_some())
    }
}

fn is_all(value: &str) -> bool {
    value == ALL
}

/// Совпадение по тексту: пустой поиск совпадает всегда
pub fn matches_search<T: Listable>(record: &T, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle)),
    }
}

/// Совпадение по всем активным фасетам (точное равенство)
pub fn matches_facets<T: Listable>(record: &T, filter: &FilterState<T::Facet>) -> bool {
    filter
        .selections
        .keys()
        .filter_map(|facet| filter.active_selection(*facet).map(|value| (*facet, value)))
        .all(|(facet, value)| record.facet_value(facet).unwrap_or_default() == value)
}

/// Проверяет, должна ли запись попасть в выборку
pub fn matches<T: Listable>(record: &T, filter: &FilterState<T::Facet>, min_search_chars: usize) -> bool {
    let needle = filter.effective_search(min_search_chars);
    matches_search(record, needle.as_deref()) && matches_facets(record, filter)
}

/// Фильтрует записи, сохраняя их исходный порядок. Сами записи не меняются.
pub fn filter_records<'a, T: Listable>(
    records: &'a [T],
    filter: &FilterState<T::Facet>,
    min_search_chars: usize,
) -> Vec<&'a T> {
    let needle = filter.effective_search(min_search_chars);
    records
        .iter()
        .filter(|r| matches_search(*r, needle.as_deref()) && matches_facets(*r, filter))
        .collect()
}
