//! Ramayana - 梵文史诗语料的内容模型与加载管线
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Corpus Context: Book → Chapter → Verse 数据模型、字段映射表、JSON 编解码
//!
//! 应用层 (application/):
//! - Ports: CorpusSource 端口定义
//! - Loader: 主资源 → 内嵌样例的回退链
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 文件来源、内嵌来源
//! - Coordinator: 单写者 actor，后台加载并发布语料快照

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
