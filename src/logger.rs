use tracing_subscriber::{EnvFilter, fmt};

/// 初始化日志系统
///
/// 支持通过 RUST_LOG 环境变量控制日志级别
/// 默认级别: warn（转换结果走 stdout，日志只写 stderr）
///
/// 示例:
/// - RUST_LOG=debug hoppman convert collection.json
pub fn init_logger() {
    init_logger_with_default("warn");
}

/// 使用指定的默认级别初始化日志（RUST_LOG 优先）
pub fn init_logger_with_default(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 重复初始化（例如测试中）时忽略错误
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();

    tracing::debug!("Logger initialized");
}
