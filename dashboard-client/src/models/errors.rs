use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 版本号相关错误
///
/// 版本比较要求两个参数都符合语义化版本规范,
/// 排序时静默降级会破坏顺序,因此必须显式报错。
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum VersionError {
    /// 版本号格式无效
    ///
    /// `argument` 标识出错的参数 (如 "version1"), `value` 为原始输入
    #[error("Invalid semantic version: {value}")]
    InvalidVersion { argument: String, value: String },

    /// 内部解析收到未经校验的字符串
    ///
    /// 属于调用约定被破坏,正常调用路径不可达
    #[error("Malformed version string: {0}")]
    Malformed(String),
}

/// 版本号表单校验错误
///
/// 消息直接展示给用户
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionRuleError {
    /// 必填项为空
    #[error("请输入版本号")]
    Required,

    /// 格式不符合语义化版本规范
    #[error("版本号格式不正确，必须符合语义化版本规范（如：1.0.0）")]
    InvalidFormat,
}

/// API调用相关错误
///
/// 处理与工具看板后端交互时的各种失败场景。
/// 每次调用都是单步转发,没有重试,错误原样交给调用方。
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ApiError {
    /// 网络请求失败
    ///
    /// 可能原因:
    /// - 网络连接中断
    /// - 后端服务不可达
    /// - 请求超时
    #[error("网络请求失败: {0}")]
    NetworkFailed(String),

    /// 响应格式无效
    ///
    /// 响应成功但缺少预期的 `data` 字段
    #[error("响应格式无效: {0}")]
    InvalidResponse(String),

    /// JSON解析失败
    #[error("响应数据解析失败: {0}")]
    JsonParseFailed(String),

    /// HTTP状态码错误
    ///
    /// 后端返回了非2xx状态码且没有统一响应体
    #[error("HTTP错误 {status}: {message}")]
    HttpStatusError { status: u16, message: String },

    /// 业务错误
    ///
    /// 统一响应体中 `code != 200`
    #[error("{message}")]
    Business { code: i32, message: String },

    /// 未登录或登录已失效
    ///
    /// 统一响应体中 `code == 401`, 本地token已被清除
    #[error("未登录或登录已失效: {0}")]
    Unauthorized(String),

    /// 客户端参数校验失败
    ///
    /// 请求未发出
    #[error("参数校验失败: {0}")]
    Validation(String),

    /// 文件超过大小限制
    #[error("文件过大: {size} 字节, 上限 {limit} 字节")]
    FileTooLarge { size: u64, limit: u64 },
}

/// 本地存储相关错误
///
/// 处理键值存储持久化过程中的失败场景
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum StorageError {
    /// 读写存储文件失败
    #[error("存储文件读写失败: {0}")]
    Io(String),

    /// 序列化/反序列化失败
    #[error("数据序列化失败: {0}")]
    SerializationError(String),

    /// 存储位置无法确定
    #[error("存储位置未找到: {0}")]
    NotFound(String),
}

/// 客户端配置错误
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ConfigError {
    /// 无效的接口地址
    #[error("无效的接口地址: {0}")]
    InvalidUrl(String),

    /// 配置项取值无效
    #[error("配置项 {key} 取值无效: {value}")]
    InvalidValue { key: String, value: String },

    /// I/O错误
    ///
    /// 读取 .env 文件时的文件系统错误
    #[error("I/O错误: {0}")]
    IoError(String),
}

/// 实现从reqwest::Error到ApiError的转换
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::NetworkFailed("请求超时".to_string())
        } else if err.is_connect() {
            ApiError::NetworkFailed("无法连接到服务器".to_string())
        } else if err.is_decode() {
            ApiError::JsonParseFailed(err.to_string())
        } else {
            ApiError::NetworkFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonParseFailed(err.to_string())
    }
}

impl From<VersionRuleError> for ApiError {
    fn from(err: VersionRuleError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                StorageError::Io(format!("权限不足: {}", err))
            }
            _ => StorageError::Io(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err.to_string())
    }
}
