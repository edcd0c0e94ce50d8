use std::io;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 默认日志目录
pub const DEFAULT_LOG_DIR: &str = "logs";

/// 初始化日志系统
///
/// 配置结构化日志输出:
/// - JSON格式: 便于机器解析和日志分析
/// - 按天轮转: 每天一个新文件 (tool-dashboard.2025-10-27.log)
/// - 双输出: 控制台(开发) + 文件(生产)
/// - 环境变量控制: RUST_LOG=debug 可调整日志级别
///
/// # 日志级别
/// - ERROR: 请求失败、存储写入失败
/// - WARN: 登录失效、图标获取失败
/// - INFO: 登录/登出、上传、主题切换 (默认级别)
/// - DEBUG: 每次REST调用
///
/// 日志中不记录token和密码。
pub fn init() -> Result<(), io::Error> {
    init_with_dir(DEFAULT_LOG_DIR)
}

/// 使用指定目录初始化日志系统
///
/// # 错误
/// - 日志目录无法创建
/// - 全局订阅器已被设置
pub fn init_with_dir(log_dir: impl AsRef<Path>) -> Result<(), io::Error> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("tool-dashboard")
        .filename_suffix("log")
        .build(log_dir.as_ref())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("无法创建日志文件: {}", e)))?;

    // 默认: INFO级别
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // 文件层: JSON格式
    let file_layer = fmt::layer()
        .json()
        .with_writer(file_appender)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false);

    // 控制台层: 人类可读格式
    let console_layer = fmt::layer()
        .with_writer(io::stdout)
        .with_target(true)
        .with_level(true)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))
}
