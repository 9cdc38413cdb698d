// Нулевой UUID, который не считается корректной ссылкой
pub const ZERO_UUID: &str = "00000000-0000-0000-0000-000000000000";

/// Проверяет, что ссылка на родителя/связанную запись действительно указана.
///
/// Пустая строка и нулевой UUID эквивалентны отсутствию ссылки.
pub fn is_set(reference: Option<&str>) -> bool {
    match reference.map(str::trim) {
        Some(r) => !r.is_empty() && r != ZERO_UUID,
        None => false,
    }
}

/// Простейшая проверка e-mail: одна `@`, непустые части, точка в домене
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
