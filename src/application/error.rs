//! 应用层错误定义

use thiserror::Error;

use crate::application::ports::SourceError;
use crate::domain::DecodeError;

/// 单一来源加载失败
#[derive(Debug, Error)]
pub enum LoadError {
    /// 资源不存在或读取失败
    #[error(transparent)]
    Source(#[from] SourceError),

    /// 资源内容无法解码
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// 后台解码任务异常退出
    #[error("Decode worker failed: {0}")]
    Worker(String),
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Source(SourceError::NotFound(_)))
    }
}
