//! Corpus Source Adapters - 语料来源实现

mod embedded_source;
mod file_source;

pub use embedded_source::{EmbeddedCorpusSource, EMBEDDED_CORPUS_JSON};
pub use file_source::{resolve_resource_path, FileCorpusSource};
