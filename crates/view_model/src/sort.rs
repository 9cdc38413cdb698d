//! Сравнение записей по ключу сортировки.
//!
//! Компаратор тотален: равные ключи дают `Ordering::Equal`, а сортировка
//! стабильна, поэтому записи с равными ключами сохраняют исходный порядок.

use crate::list_utils::Listable;
use std::cmp::Ordering;

/// Значение поля для сортировки.
///
/// Отсутствующие поля заменяются на `Text("")`, `Number(0.0)` или `Date(0)`
/// ещё при извлечении значения.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Bool(bool),
    Number(f64),
    /// Миллисекунды от начала эпохи
    Date(i64),
    Text(String),
}

impl SortValue {
    pub fn text(value: Option<&str>) -> Self {
        SortValue::Text(value.unwrap_or("").to_string())
    }

    pub fn number(value: Option<f64>) -> Self {
        SortValue::Number(value.unwrap_or(0.0))
    }

    pub fn date<Tz: chrono::TimeZone>(value: Option<&chrono::DateTime<Tz>>) -> Self {
        SortValue::Date(value.map(|d| d.timestamp_millis()).unwrap_or(0))
    }

    pub fn naive_date(value: chrono::NaiveDate) -> Self {
        let millis = value
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or(0);
        SortValue::Date(millis)
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Bool(_) => 0,
            SortValue::Number(_) => 1,
            SortValue::Date(_) => 2,
            SortValue::Text(_) => 3,
        }
    }
}

/// Естественный порядок значений (по возрастанию)
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Bool(x), SortValue::Bool(y)) => x.cmp(y),
        (SortValue::Number(x), SortValue::Number(y)) => x.total_cmp(y),
        (SortValue::Date(x), SortValue::Date(y)) => x.cmp(y),
        (SortValue::Text(x), SortValue::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        _ => a.rank().cmp(&b.rank()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + Eq> SortState<K> {
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Клик по заголовку колонки: тот же ключ меняет направление,
    /// новый ключ сортирует по возрастанию.
    pub fn toggle(self, key: K) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self::ascending(key)
        }
    }

    /// Индикатор сортировки для заголовка колонки `key`
    pub fn indicator(&self, key: K) -> &'static str {
        if self.key == key {
            match self.direction {
                SortDirection::Ascending => "▲",
                SortDirection::Descending => "▼",
            }
        } else {
            "⇅"
        }
    }

    pub fn compare<T>(&self, a: &T, b: &T) -> Ordering
    where
        T: Listable<SortKey = K>,
    {
        self.direction
            .apply(compare_values(&a.sort_value(self.key), &b.sort_value(self.key)))
    }
}

/// Стабильная сортировка ссылок на записи
pub fn sort_records<T>(rows: &mut [&T], sort: &SortState<T::SortKey>)
where
    T: Listable,
{
    rows.sort_by(|a, b| sort.compare(*a, *b));
}
