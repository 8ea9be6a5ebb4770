//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（CorpusSource）
//! - loader: 语料加载用例（主资源 → 内嵌样例的回退链）
//! - error: 应用层错误定义

pub mod error;
pub mod loader;
pub mod ports;

pub use error::LoadError;
pub use loader::{CorpusLoader, LoadedCorpus, LoadedFrom};
pub use ports::{CorpusSourcePort, SourceError};
