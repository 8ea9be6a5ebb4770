//! Corpus Context - Errors

use thiserror::Error;

/// 整份文档的解码失败
///
/// 路径使用外部字段名，例如 `$.kandas[2].Sargas[0].Sloka_Count`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Malformed JSON at line {line}, column {column}: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Type mismatch at {path}: expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Duplicate id {id:?} at {path}")]
    DuplicateId { path: String, id: String },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Malformed {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// 已在原地恢复的字段级问题，不会使所在实体解码失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldWarning {
    /// 主题色无效，已替换为中性色
    InvalidColor { path: String, value: String },
}
