//! 日志与追踪系统
//! 初始化结构化日志

use crate::config::LoggingConfig;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// 构建过滤器：RUST_LOG 优先，否则使用配置中的日志级别
fn build_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // 降低 sqlx 查询日志的噪音
        EnvFilter::new(format!("{},sqlx=warn", logging.level))
    })
}

/// 初始化日志与追踪系统
///
/// 重复初始化（例如测试中）会返回错误而不是 panic
pub fn init_telemetry(logging: &LoggingConfig) -> anyhow::Result<()> {
    let log_layer = match logging.format.to_lowercase().as_str() {
        // JSON 格式（生产环境）
        "json" => tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
        // 美化格式（开发环境）
        "pretty" => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(false)
            .boxed(),
        _ => tracing_subscriber::fmt::layer().with_target(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(build_filter(logging))
        .with(log_layer)
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        level = %logging.level,
        format = %logging.format,
        "Telemetry initialized"
    );

    Ok(())
}
