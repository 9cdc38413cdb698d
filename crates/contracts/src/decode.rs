//! Строгое декодирование ответов REST API.
//!
//! Всё, что приходит с сервера, проходит здесь десериализацию и `validate()`
//! до попадания в списки. Некорректная запись отклоняет весь ответ.

use crate::domain::common::Validated;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Ошибки декодирования ответа API
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected payload shape: {0}")]
    Shape(String),

    #[error("Record #{index} does not match the schema: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record #{index} (id {id}) is invalid: {reason}")]
    Invalid {
        index: usize,
        id: String,
        reason: String,
    },
}

/// Декодирует список записей: голый массив либо обёртку `{ "data": [...] }`
pub fn decode_list<T>(json: &str) -> Result<Vec<T>, DecodeError>
where
    T: DeserializeOwned + Validated,
{
    let value: Value = serde_json::from_str(json)?;
    decode_list_value(value)
}

/// То же, что [`decode_list`], но для уже разобранного `Value`
pub fn decode_list_value<T>(value: Value) -> Result<Vec<T>, DecodeError>
where
    T: DeserializeOwned + Validated,
{
    let items = match unwrap_envelope(value)? {
        Value::Array(items) => items,
        other => {
            return Err(DecodeError::Shape(format!(
                "expected an array of records, got {}",
                kind_of(&other)
            )))
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        records.push(decode_item(index, item)?);
    }
    log::debug!("decoded {} records", records.len());
    Ok(records)
}

/// Декодирует одну запись (допускается обёртка `{ "data": {...} }`)
pub fn decode_one<T>(json: &str) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Validated,
{
    let value: Value = serde_json::from_str(json)?;
    match unwrap_envelope(value)? {
        item @ Value::Object(_) => decode_item(0, item),
        other => Err(DecodeError::Shape(format!(
            "expected a record object, got {}",
            kind_of(&other)
        ))),
    }
}

fn decode_item<T>(index: usize, item: Value) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Validated,
{
    let record: T =
        serde_json::from_value(item).map_err(|source| DecodeError::Record { index, source })?;
    if let Err(reason) = record.validate() {
        log::warn!("rejecting record #{} ({}): {}", index, record.record_id(), reason);
        return Err(DecodeError::Invalid {
            index,
            id: record.record_id().to_string(),
            reason,
        });
    }
    Ok(record)
}

/// Снимает обёртку `{ "data": ... }`, если она есть
fn unwrap_envelope(value: Value) -> Result<Value, DecodeError> {
    match value {
        Value::Object(mut map) if !looks_like_record(&map) => match map.remove("data") {
            Some(data) => Ok(data),
            None => Err(DecodeError::Shape(
                "object without `data` field".to_string(),
            )),
        },
        other => Ok(other),
    }
}

// Запись всегда несёт `id`; обёртка — никогда
fn looks_like_record(map: &serde_json::Map<String, Value>) -> bool {
    map.contains_key("id")
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
