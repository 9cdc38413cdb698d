//! Полный путь категории по цепочке родителей.

use contracts::domain::a003_category::{Category, CategoryRef};
use contracts::domain::common::is_set;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_SEPARATOR: &str = " / ";

/// Таблица категорий по идентификатору
pub type CategoryLookup<'a> = HashMap<&'a str, &'a Category>;

pub fn build_lookup(categories: &[Category]) -> CategoryLookup<'_> {
    categories.iter().map(|c| (c.id.as_str(), c)).collect()
}

/// Имена от корня до `leaf` включительно.
///
/// Обход прекращается, когда у категории нет родителя, родитель не найден
/// в таблице или встречается повторно (цикл в данных). В этих случаях
/// возвращается уже собранная часть пути.
pub fn category_path_segments(leaf: &Category, lookup: &CategoryLookup<'_>) -> Vec<String> {
    let mut names = vec![leaf.name.clone()];
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(leaf.id.as_str());

    let mut parent_id = leaf.parent_id.as_deref();
    while is_set(parent_id) {
        let Some(pid) = parent_id.map(str::trim) else {
            break;
        };
        let Some(parent) = lookup.get(pid) else {
            log::warn!("category {} has unresolved parent {}", leaf.id, pid);
            break;
        };
        if !visited.insert(parent.id.as_str()) {
            log::warn!("category {} has a cyclic parent chain at {}", leaf.id, pid);
            break;
        }
        names.push(parent.name.clone());
        parent_id = parent.parent_id.as_deref();
    }

    names.reverse();
    names
}

pub fn category_path(leaf: &Category, lookup: &CategoryLookup<'_>, separator: &str) -> String {
    category_path_segments(leaf, lookup).join(separator)
}

/// Канонический путь для ссылки товара на категорию.
///
/// Строковая (старая) ссылка уже является путём. Структурированная берётся
/// из таблицы по id, если там есть свежая запись, иначе разворачивается по
/// своему `parent_id`.
pub fn category_ref_path(
    category: &CategoryRef,
    lookup: &CategoryLookup<'_>,
    separator: &str,
) -> String {
    match category {
        CategoryRef::Legacy(path) => path.trim().to_string(),
        CategoryRef::Structured { id, .. } => match lookup.get(id.as_str()) {
            Some(known) => category_path(known, lookup, separator),
            None => match category.as_category() {
                Some(own) => category_path(&own, lookup, separator),
                None => category.leaf_name().to_string(),
            },
        },
    }
}
