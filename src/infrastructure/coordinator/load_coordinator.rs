//! Load Coordinator - 语料加载协调器
//!
//! 单写者 actor：
//! - 加载请求经 mpsc 进入 actor，actor 是唯一修改 in-flight 状态和语料槽位的地方
//! - 实际加载在独立任务中执行（文件读取走 tokio::fs，解码走 spawn_blocking）
//! - 加载完成后结果回到 actor，由 actor 写入 watch 槽位，每次加载只发布一次
//! - 加载进行中时的新请求合并到当前加载，不会启动第二次加载

use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};

use super::snapshot::{CorpusSnapshot, LoadState};
use crate::application::{CorpusLoader, LoadedCorpus};
use crate::domain::Corpus;

/// 协调器错误
#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("Load coordinator is closed")]
    Closed,
}

/// 协调器配置
#[derive(Debug, Clone)]
pub struct LoadCoordinatorConfig {
    /// 请求队列容量
    pub queue_capacity: usize,
}

impl Default for LoadCoordinatorConfig {
    fn default() -> Self {
        Self { queue_capacity: 16 }
    }
}

type Waiter = oneshot::Sender<Option<Arc<Corpus>>>;

enum Command {
    RequestLoad { reply: Option<Waiter> },
    Shutdown,
}

/// 后台加载任务的结果
struct Completion {
    generation: u64,
    loaded: Option<LoadedCorpus>,
}

/// 协调器句柄
///
/// 可克隆；所有克隆共享同一个 actor 和槽位
#[derive(Clone)]
pub struct LoadCoordinator {
    commands: mpsc::Sender<Command>,
    snapshot: watch::Receiver<CorpusSnapshot>,
}

impl LoadCoordinator {
    /// 启动 actor 并返回句柄
    ///
    /// 必须在 tokio 运行时内调用
    pub fn spawn(loader: Arc<CorpusLoader>, config: LoadCoordinatorConfig) -> Self {
        let (command_tx, command_rx) = mpsc::channel(config.queue_capacity.max(1));
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let (slot_tx, slot_rx) = watch::channel(CorpusSnapshot::default());

        let actor = CoordinatorActor {
            loader,
            commands: command_rx,
            completion_tx,
            completions: completion_rx,
            slot: slot_tx,
            generation: 0,
            in_flight: None,
            waiters: Vec::new(),
        };
        tokio::spawn(actor.run());

        Self {
            commands: command_tx,
            snapshot: slot_rx,
        }
    }

    /// 请求一次加载（不等待结果）
    ///
    /// 加载进行中时该请求合并到当前加载
    pub fn request_load(&self) {
        if let Err(e) = self.commands.try_send(Command::RequestLoad { reply: None }) {
            tracing::warn!(error = %e, "Failed to enqueue load request");
        }
    }

    /// 请求一次加载并等待满足该请求的那次发布
    pub async fn load(&self) -> Result<Option<Arc<Corpus>>, CoordinatorError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(Command::RequestLoad {
                reply: Some(reply_tx),
            })
            .await
            .map_err(|_| CoordinatorError::Closed)?;
        reply_rx.await.map_err(|_| CoordinatorError::Closed)
    }

    /// 当前已发布的语料
    pub fn corpus(&self) -> Option<Arc<Corpus>> {
        self.snapshot.borrow().corpus()
    }

    pub fn snapshot(&self) -> CorpusSnapshot {
        self.snapshot.borrow().clone()
    }

    /// 订阅槽位变化（仅在发布时通知）
    pub fn subscribe(&self) -> watch::Receiver<CorpusSnapshot> {
        self.snapshot.clone()
    }

    /// 停止 actor；进行中的加载结果将被丢弃
    pub async fn shutdown(&self) {
        if self.commands.send(Command::Shutdown).await.is_err() {
            tracing::debug!("Load coordinator already stopped");
        }
    }
}

/// 持有全部可变状态的 actor
struct CoordinatorActor {
    loader: Arc<CorpusLoader>,
    commands: mpsc::Receiver<Command>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completions: mpsc::UnboundedReceiver<Completion>,
    slot: watch::Sender<CorpusSnapshot>,
    generation: u64,
    /// 进行中加载的 generation
    in_flight: Option<u64>,
    waiters: Vec<Waiter>,
}

impl CoordinatorActor {
    async fn run(mut self) {
        tracing::info!("LoadCoordinator started");

        loop {
            tokio::select! {
                biased;

                command = self.commands.recv() => match command {
                    Some(Command::RequestLoad { reply }) => self.handle_request(reply),
                    Some(Command::Shutdown) | None => break,
                },
                Some(completion) = self.completions.recv() => self.handle_completion(completion),
            }
        }

        if let Some(generation) = self.in_flight {
            tracing::debug!(generation, "Discarding in-flight load on shutdown");
        }
        tracing::info!("LoadCoordinator stopped");
    }

    fn handle_request(&mut self, reply: Option<Waiter>) {
        if let Some(waiter) = reply {
            self.waiters.push(waiter);
        }

        if let Some(generation) = self.in_flight {
            tracing::debug!(generation, "Load already in flight, request coalesced");
            return;
        }

        self.generation += 1;
        let generation = self.generation;
        self.in_flight = Some(generation);

        let loader = Arc::clone(&self.loader);
        let completion_tx = self.completion_tx.clone();
        tokio::spawn(async move {
            // 加载任务 panic 时按"无语料"完成，避免 in-flight 永远不被清除
            let loaded = match tokio::spawn(async move { loader.load_with_origin().await }).await
            {
                Ok(loaded) => loaded,
                Err(e) => {
                    tracing::error!(generation, error = %e, "Load task failed");
                    None
                }
            };
            // actor 已停止时结果直接丢弃
            let _ = completion_tx.send(Completion { generation, loaded });
        });

        tracing::debug!(generation, "Load started");
    }

    fn handle_completion(&mut self, completion: Completion) {
        if self.in_flight != Some(completion.generation) {
            tracing::debug!(
                generation = completion.generation,
                "Discarding stale load result"
            );
            return;
        }
        self.in_flight = None;

        let origin = completion.loaded.as_ref().map(|l| l.origin.as_str());
        let state = match completion.loaded {
            Some(loaded) => LoadState::Ready(Arc::new(loaded.corpus)),
            None => LoadState::Unavailable,
        };

        let state_name = state.as_str();
        let mut revision = 0;
        self.slot.send_modify(|snapshot| {
            snapshot.revision += 1;
            snapshot.state = state;
            snapshot.published_at = Some(Utc::now());
            revision = snapshot.revision;
        });

        let published = self.slot.borrow().corpus();
        for waiter in self.waiters.drain(..) {
            let _ = waiter.send(published.clone());
        }

        if let (Some(corpus), Some(origin)) = (&published, origin) {
            tracing::info!(
                generation = completion.generation,
                revision,
                origin,
                state = state_name,
                books = corpus.len(),
                "Corpus published"
            );
        } else {
            tracing::warn!(
                generation = completion.generation,
                revision,
                state = state_name,
                "No corpus available"
            );
        }
    }
}
