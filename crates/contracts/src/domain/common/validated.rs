/// Трейт для записей, проверяемых на границе системы
///
/// Декодер вызывает `validate()` для каждой записи сразу после десериализации,
/// поэтому конвейер списков получает только корректные данные.
pub trait Validated {
    /// Идентификатор записи (для сообщений об ошибках)
    fn record_id(&self) -> &str;

    /// Проверить инварианты записи
    fn validate(&self) -> Result<(), String>;
}
