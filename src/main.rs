//! Novel Splitter - 小说分章服务

use std::sync::Arc;

use novel_splitter::application::SplitLimits;
use novel_splitter::config::{load_config, print_config, LogConfig};
use novel_splitter::infrastructure::adapters::DispatchingManuscriptParser;
use novel_splitter::infrastructure::http::{AppState, HttpServer, ServerConfig, SplitDefaults};

/// 初始化日志，RUST_LOG 优先于配置文件中的级别
fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},novel_splitter={},tower_http=debug",
        log.level, log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Novel Splitter - 小说分章服务");
    print_config(&config);

    let parser = Arc::new(DispatchingManuscriptParser::new());
    let limits = SplitLimits {
        max_target_chars: config.splitter.max_target_chars,
        max_text_chars: config.splitter.max_text_chars,
    };
    let defaults = SplitDefaults {
        mode: config.splitter.default_mode,
        target_chars: config.splitter.default_target_chars,
    };
    let state = AppState::new(parser, limits, defaults);

    let body_limit = usize::try_from(config.storage.max_upload_size)?;
    let server_config = ServerConfig::new(&config.server.host, config.server.port, body_limit);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
