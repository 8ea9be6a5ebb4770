//! Ramayana - 语料阅读器（无界面版）
//!
//! 启动时请求一次加载，等待发布后输出卷/章目录

use std::sync::Arc;

use ramayana::application::CorpusLoader;
use ramayana::config::{load_config, print_config};
use ramayana::domain::Corpus;
use ramayana::infrastructure::adapters::{resolve_resource_path, FileCorpusSource};
use ramayana::infrastructure::{EmbeddedCorpusSource, LoadCoordinator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},ramayana={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Ramayana corpus reader");
    print_config(&config);

    let resource = FileCorpusSource::new(resolve_resource_path(
        &config.corpus.data_file,
        config.corpus.resource_dir.as_deref(),
    ));
    tracing::info!(path = %resource.path().display(), "Corpus resource");

    let loader = CorpusLoader::new(Arc::new(resource), Arc::new(EmbeddedCorpusSource::new()));
    let coordinator = LoadCoordinator::spawn(loader.arc(), (&config.coordinator).into());

    let corpus = coordinator.load().await?;
    coordinator.shutdown().await;

    match corpus {
        Some(corpus) => {
            print_outline(&corpus);
            Ok(())
        }
        None => anyhow::bail!("No corpus available"),
    }
}

fn print_outline(corpus: &Corpus) {
    println!(
        "Vālmeeki Rāmāyaṇa: {} books, {}/{} verses transcribed",
        corpus.len(),
        corpus.total_populated_verses(),
        corpus.total_declared_verses()
    );

    for book in corpus.books() {
        println!(
            "\n[{}] {} ({}) {}",
            book.id(),
            book.title(),
            book.theme_color(),
            book.description()
        );
        for chapter in book.chapters() {
            let status = if chapter.is_stub() { " (pending)" } else { "" };
            println!(
                "  Sarga {}: {} - {}/{} verses{}",
                chapter.id(),
                chapter.description(),
                chapter.verses().len(),
                chapter.verse_count(),
                status
            );
        }
        if let Some(verse) = book.verses().next() {
            println!("    {} {}", verse.id(), verse.original_text());
            println!("    {}", verse.transliteration());
            println!("    {}", verse.translation());
        }
    }
}
