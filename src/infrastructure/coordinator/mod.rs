//! Coordinator Layer - 加载协调
//!
//! 把加载工作放到后台任务，并把唯一结果交回拥有语料槽位的 actor

mod load_coordinator;
mod snapshot;

pub use load_coordinator::{CoordinatorError, LoadCoordinator, LoadCoordinatorConfig};
pub use snapshot::{CorpusSnapshot, LoadState};
