//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Corpus Context: 经文语料（Kanda → Sarga → Shloka）的数据模型与编解码

pub mod corpus;

pub use corpus::{
    decode, decode_str, decode_with_report, encode, encode_to_string_pretty, Book, Chapter,
    Corpus, DecodeError, DecodeReport, FieldWarning, Rgba, ThemeColor, Verse, VersePath,
};
