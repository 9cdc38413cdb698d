//! Типизированные записи админ-панели магазина и строгий декодер ответов API.

pub mod decode;
pub mod domain;
pub mod enums;

pub use decode::{decode_list, decode_list_value, decode_one, DecodeError};
