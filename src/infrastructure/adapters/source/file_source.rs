//! File Source - 磁盘上的语料资源
//!
//! 实现 CorpusSourcePort trait

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{CorpusSourcePort, SourceError};

/// 解析资源路径
///
/// - 绝对路径原样使用
/// - 相对路径优先拼接到 `resource_dir`
/// - 否则相对于当前可执行文件所在目录（随应用打包的资源）
/// - 可执行文件路径不可用时退回当前工作目录
pub fn resolve_resource_path(file: &Path, resource_dir: Option<&Path>) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }
    if let Some(dir) = resource_dir {
        return dir.join(file);
    }
    match std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        Some(dir) => dir.join(file),
        None => file.to_path_buf(),
    }
}

/// 文件系统语料来源
pub struct FileCorpusSource {
    path: PathBuf,
}

impl FileCorpusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CorpusSourcePort for FileCorpusSource {
    async fn read(&self) -> Result<Vec<u8>, SourceError> {
        match fs::read(&self.path).await {
            Ok(data) => {
                tracing::debug!(
                    path = %self.path.display(),
                    size_bytes = data.len(),
                    "Read corpus resource"
                );
                Ok(data)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SourceError::NotFound(
                self.path.to_string_lossy().to_string(),
            )),
            Err(e) => Err(SourceError::ReadError(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
