//! Corpus Loader - 语料加载用例
//!
//! 回退链（严格顺序，首个成功即返回）:
//! 1. 主资源（随应用打包的 `ramayana_data.json`）
//! 2. 内嵌样例语料
//! 3. 两者都失败 → None
//!
//! 主资源的任何失败都只记日志，不向上传播。

use std::sync::Arc;

use crate::application::error::LoadError;
use crate::application::ports::CorpusSourcePort;
use crate::domain::{decode_with_report, Corpus};

/// 语料来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadedFrom {
    Resource,
    Embedded,
}

impl LoadedFrom {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadedFrom::Resource => "resource",
            LoadedFrom::Embedded => "embedded",
        }
    }
}

/// 加载结果及其来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCorpus {
    pub corpus: Corpus,
    pub origin: LoadedFrom,
}

/// 语料加载器
pub struct CorpusLoader {
    resource: Arc<dyn CorpusSourcePort>,
    embedded: Arc<dyn CorpusSourcePort>,
}

impl CorpusLoader {
    pub fn new(resource: Arc<dyn CorpusSourcePort>, embedded: Arc<dyn CorpusSourcePort>) -> Self {
        Self { resource, embedded }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 按回退链加载
    pub async fn load(&self) -> Option<Corpus> {
        self.load_with_origin().await.map(|loaded| loaded.corpus)
    }

    pub async fn load_with_origin(&self) -> Option<LoadedCorpus> {
        match self.load_from_resource().await {
            Ok(corpus) => {
                return Some(LoadedCorpus {
                    corpus,
                    origin: LoadedFrom::Resource,
                })
            }
            Err(e) if e.is_not_found() => {
                tracing::info!(
                    source = %self.resource.describe(),
                    "Corpus resource not found, using embedded sample"
                );
            }
            Err(e) => {
                tracing::warn!(
                    source = %self.resource.describe(),
                    error = %e,
                    "Failed to load corpus resource, using embedded sample"
                );
            }
        }

        match self.load_embedded().await {
            Ok(corpus) => Some(LoadedCorpus {
                corpus,
                origin: LoadedFrom::Embedded,
            }),
            Err(e) => {
                tracing::error!(
                    source = %self.embedded.describe(),
                    error = %e,
                    "Embedded corpus failed to load, no corpus available"
                );
                None
            }
        }
    }

    /// 仅从主资源加载
    pub async fn load_from_resource(&self) -> Result<Corpus, LoadError> {
        read_and_decode(&self.resource).await
    }

    /// 仅从内嵌样例加载
    pub async fn load_embedded(&self) -> Result<Corpus, LoadError> {
        read_and_decode(&self.embedded).await
    }
}

/// 读取字节后在阻塞线程池上解码
///
/// 读取在独立任务中执行，来源 panic 时按 Worker 错误处理
async fn read_and_decode(source: &Arc<dyn CorpusSourcePort>) -> Result<Corpus, LoadError> {
    let reader = Arc::clone(source);
    let bytes = tokio::spawn(async move { reader.read().await })
        .await
        .map_err(|e| LoadError::Worker(e.to_string()))??;
    let size = bytes.len();

    let report = tokio::task::spawn_blocking(move || decode_with_report(&bytes))
        .await
        .map_err(|e| LoadError::Worker(e.to_string()))??;

    tracing::debug!(
        source = %source.describe(),
        size_bytes = size,
        books = report.corpus.len(),
        warnings = report.warnings.len(),
        "Corpus decoded"
    );

    Ok(report.corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SourceError;
    use async_trait::async_trait;

    struct StaticSource(Result<&'static str, SourceError>);

    #[async_trait]
    impl CorpusSourcePort for StaticSource {
        async fn read(&self) -> Result<Vec<u8>, SourceError> {
            self.0.clone().map(|s| s.as_bytes().to_vec())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    struct PanickingSource;

    #[async_trait]
    impl CorpusSourcePort for PanickingSource {
        async fn read(&self) -> Result<Vec<u8>, SourceError> {
            panic!("source exploded")
        }

        fn describe(&self) -> String {
            "panicking".to_string()
        }
    }

    const ONE_BOOK: &str = r##"{
        "kandas": [{
            "Kanda_Number": "7",
            "Sanskrit_Name": "उत्तरकाण्ड",
            "Description": "Uttara Kāṇḍa",
            "Theme_Color": "#800080",
            "Sargas": [{ "Sarga_Number": "1", "Description": "", "Sloka_Count": 43, "Shlokas": [] }]
        }]
    }"##;

    const EMPTY: &str = r#"{ "kandas": [] }"#;

    fn loader(
        resource: Result<&'static str, SourceError>,
        embedded: Result<&'static str, SourceError>,
    ) -> CorpusLoader {
        CorpusLoader::new(
            Arc::new(StaticSource(resource)),
            Arc::new(StaticSource(embedded)),
        )
    }

    #[tokio::test]
    async fn test_prefers_resource() {
        let loaded = loader(Ok(ONE_BOOK), Ok(EMPTY))
            .load_with_origin()
            .await
            .unwrap();
        assert_eq!(loaded.origin, LoadedFrom::Resource);
        assert_eq!(loaded.corpus.books()[0].id(), "7");
    }

    #[tokio::test]
    async fn test_missing_resource_falls_back() {
        let loaded = loader(Err(SourceError::NotFound("x".into())), Ok(ONE_BOOK))
            .load_with_origin()
            .await
            .unwrap();
        assert_eq!(loaded.origin, LoadedFrom::Embedded);
        assert_eq!(loaded.corpus.len(), 1);
    }

    #[tokio::test]
    async fn test_read_error_falls_back() {
        let loaded = loader(Err(SourceError::ReadError("denied".into())), Ok(EMPTY))
            .load_with_origin()
            .await
            .unwrap();
        assert_eq!(loaded.origin, LoadedFrom::Embedded);
    }

    #[tokio::test]
    async fn test_malformed_resource_falls_back() {
        let loaded = loader(Ok("{ not json"), Ok(ONE_BOOK))
            .load_with_origin()
            .await
            .unwrap();
        assert_eq!(loaded.origin, LoadedFrom::Embedded);
        assert_eq!(loaded.corpus.books()[0].id(), "7");
    }

    #[tokio::test]
    async fn test_double_failure_is_none() {
        let loader = loader(Err(SourceError::NotFound("x".into())), Ok("[]"));
        assert!(loader.load().await.is_none());
    }

    #[tokio::test]
    async fn test_single_source_errors_are_typed() {
        let loader = loader(Err(SourceError::NotFound("x".into())), Ok("{"));
        assert!(loader.load_from_resource().await.unwrap_err().is_not_found());
        assert!(matches!(
            loader.load_embedded().await,
            Err(LoadError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_panicking_resource_falls_back() {
        let loader = CorpusLoader::new(
            Arc::new(PanickingSource),
            Arc::new(StaticSource(Ok(ONE_BOOK))),
        );
        assert!(matches!(
            loader.load_from_resource().await,
            Err(LoadError::Worker(_))
        ));

        let loaded = loader.load_with_origin().await.unwrap();
        assert_eq!(loaded.origin, LoadedFrom::Embedded);
        assert_eq!(loaded.corpus.books()[0].id(), "7");
    }

    #[tokio::test]
    async fn test_panicking_embedded_is_none() {
        let loader = CorpusLoader::new(
            Arc::new(StaticSource(Err(SourceError::NotFound("x".into())))),
            Arc::new(PanickingSource),
        );
        assert!(loader.load().await.is_none());
    }
}
