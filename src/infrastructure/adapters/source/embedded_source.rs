//! Embedded Source - 内嵌样例语料
//!
//! 六卷各一章一颂（"1.1.1" .. "6.1.1"），仅在主资源缺失或无效时使用

use async_trait::async_trait;

use crate::application::ports::{CorpusSourcePort, SourceError};

/// 内嵌样例语料（与 `ramayana_data.json` 同一结构）
pub const EMBEDDED_CORPUS_JSON: &str = include_str!("../../../../assets/ramayana_sample.json");

/// 内嵌语料来源
pub struct EmbeddedCorpusSource {
    json: &'static str,
}

impl EmbeddedCorpusSource {
    pub fn new() -> Self {
        Self {
            json: EMBEDDED_CORPUS_JSON,
        }
    }

    /// 使用自定义常量（测试用）
    pub fn with_json(json: &'static str) -> Self {
        Self { json }
    }
}

impl Default for EmbeddedCorpusSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CorpusSourcePort for EmbeddedCorpusSource {
    async fn read(&self) -> Result<Vec<u8>, SourceError> {
        Ok(self.json.as_bytes().to_vec())
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}
