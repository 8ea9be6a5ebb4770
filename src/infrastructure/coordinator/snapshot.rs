//! Corpus Snapshot - 可观察的语料槽位

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::Corpus;

/// 槽位状态
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// 尚未完成任何一次加载
    #[default]
    Pending,
    /// 已发布的语料
    Ready(Arc<Corpus>),
    /// 主资源与内嵌样例均失败
    Unavailable,
}

impl LoadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Pending => "pending",
            LoadState::Ready(_) => "ready",
            LoadState::Unavailable => "unavailable",
        }
    }
}

/// 槽位快照
///
/// revision 每发布一次加一，只由协调器 actor 写入
#[derive(Debug, Clone, Default)]
pub struct CorpusSnapshot {
    pub revision: u64,
    pub state: LoadState,
    pub published_at: Option<DateTime<Utc>>,
}

impl CorpusSnapshot {
    pub fn corpus(&self) -> Option<Arc<Corpus>> {
        match &self.state {
            LoadState::Ready(corpus) => Some(Arc::clone(corpus)),
            LoadState::Pending | LoadState::Unavailable => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, LoadState::Pending)
    }
}
