//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现以及加载协调器

pub mod adapters;
pub mod coordinator;

pub use adapters::{EmbeddedCorpusSource, FileCorpusSource};
pub use coordinator::{
    CoordinatorError, CorpusSnapshot, LoadCoordinator, LoadCoordinatorConfig, LoadState,
};
