//! Corpus Source Port - 出站端口
//!
//! "读取具名资源，返回字节或 NotFound"

use async_trait::async_trait;
use thiserror::Error;

/// 资源读取错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to read resource: {0}")]
    ReadError(String),
}

/// Corpus Source Port - 出站端口
///
/// 语料的原始字节来源（磁盘文件、内嵌常量等）
#[async_trait]
pub trait CorpusSourcePort: Send + Sync {
    /// 读取完整资源
    async fn read(&self) -> Result<Vec<u8>, SourceError>;

    /// 用于日志的来源描述
    fn describe(&self) -> String;
}
