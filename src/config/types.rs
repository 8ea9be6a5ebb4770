//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::infrastructure::LoadCoordinatorConfig;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 语料资源配置
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// 加载协调器配置
    #[serde(default)]
    pub coordinator: CoordinatorConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 语料资源配置
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    /// 语料文件名或路径，相对路径按 resource_dir / 可执行文件目录解析
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// 资源目录（可选）
    #[serde(default)]
    pub resource_dir: Option<PathBuf>,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("ramayana_data.json")
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            resource_dir: None,
        }
    }
}

/// 加载协调器配置
#[derive(Debug, Clone, Deserialize)]
pub struct CoordinatorConfig {
    /// 请求队列容量
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

fn default_queue_capacity() -> usize {
    16
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
        }
    }
}

impl From<&CoordinatorConfig> for LoadCoordinatorConfig {
    fn from(config: &CoordinatorConfig) -> Self {
        Self {
            queue_capacity: config.queue_capacity,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
