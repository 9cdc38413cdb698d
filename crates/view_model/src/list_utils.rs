//! Общий контракт записей, которые умеют показывать страницы-списки.

use crate::sort::SortValue;

/// Запись, пригодная для поиска, фасетной фильтрации и сортировки.
///
/// Фасеты и ключи сортировки — типизированные перечисления конкретной
/// страницы, а не строки с именами полей.
pub trait Listable {
    /// Категориальное измерение фильтра (статус, тип события, ...)
    type Facet: Copy + Ord + std::fmt::Debug;

    /// Поле, по которому можно сортировать
    type SortKey: Copy + Eq + std::fmt::Debug;

    /// Стабильный идентификатор записи
    fn record_id(&self) -> &str;

    /// Текстовые поля, участвующие в поиске
    fn search_fields(&self) -> Vec<&str>;

    /// Значение фасета; `None` для отсутствующего поля
    fn facet_value(&self, facet: Self::Facet) -> Option<String>;

    /// Значение для сравнения при сортировке
    fn sort_value(&self, key: Self::SortKey) -> SortValue;
}

/// Диапазоны (в байтах исходного `text`) всех вхождений `search` без учёта
/// регистра.
///
/// Совпадения не перекрываются. Регистр меняется посимвольно, поэтому границы
/// диапазонов всегда совпадают с границами символов `text`, даже если при
/// смене регистра меняется длина символа. Совпадение, которое начинается или
/// заканчивается внутри развёртки одного символа, пропускается.
pub fn highlight_ranges(text: &str, search: &str) -> Vec<(usize, usize)> {
    let needle: String = search.trim().chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // starts[i] — байт исходного текста, если в позиции i нижнего регистра
    // начинается развёртка очередного символа
    let mut lowered = String::with_capacity(text.len());
    let mut starts: Vec<Option<usize>> = Vec::with_capacity(text.len() + 1);
    for (orig_pos, ch) in text.char_indices() {
        let before = lowered.len();
        lowered.extend(ch.to_lowercase());
        starts.push(Some(orig_pos));
        starts.resize(starts.len() + (lowered.len() - before - 1), None);
    }
    starts.push(Some(text.len()));

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = lowered[last_pos..].find(&needle) {
        let start = last_pos + pos;
        let end = start + needle.len();
        match (starts[start], starts[end]) {
            (Some(s), Some(e)) => {
                ranges.push((s, e));
                last_pos = end;
            }
            _ => {
                // сдвиг на один символ нижнего регистра
                last_pos = start
                    + lowered[start..]
                        .chars()
                        .next()
                        .map(char::len_utf8)
                        .unwrap_or(1);
            }
        }
    }
    ranges
}
