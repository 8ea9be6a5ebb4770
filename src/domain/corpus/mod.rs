//! Corpus Context - 语料限界上下文
//!
//! 职责:
//! - Book / Chapter / Verse 实体与 Corpus 聚合根
//! - 外部字段名 ↔ 语义字段的映射表
//! - JSON 解码（带字段级容错）与对称编码

mod aggregate;
mod decoder;
mod encoder;
mod entities;
mod errors;
pub mod schema;
mod value_objects;

pub use aggregate::Corpus;
pub use decoder::{decode, decode_str, decode_with_report, DecodeReport};
pub use encoder::{encode, encode_to_string_pretty};
pub use entities::{Book, Chapter, Verse};
pub use errors::{DecodeError, FieldWarning};
pub use value_objects::{Rgba, ThemeColor, VersePath};
