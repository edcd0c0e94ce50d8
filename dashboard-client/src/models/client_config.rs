use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::ConfigError;

/// 默认接口地址
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// 默认请求超时 (秒)
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// 客户端配置
///
/// 封装访问工具看板后端所需的全部参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// 接口根地址,所有REST路径都拼接在其后
    ///
    /// 示例: "http://localhost:8080/api"
    pub base_url: String,

    /// 请求超时 (秒)
    pub timeout_secs: u64,

    /// 本地键值存储文件路径 (可选)
    ///
    /// 为空时使用系统数据目录下的默认位置
    pub store_path: Option<PathBuf>,
}

impl ClientConfig {
    /// 创建新的客户端配置
    ///
    /// # 示例
    /// ```
    /// use tool_dashboard::models::ClientConfig;
    ///
    /// let config = ClientConfig::new("http://tools.internal/api/");
    /// assert_eq!(config.base_url, "http://tools.internal/api");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            store_path: None,
        }
    }

    /// 设置超时 (构建器模式)
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// 设置存储文件路径 (构建器模式)
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// 拼接完整请求地址
    ///
    /// # 示例
    /// ```
    /// use tool_dashboard::models::ClientConfig;
    ///
    /// let config = ClientConfig::default();
    /// assert_eq!(config.endpoint("/tools/list"), "http://localhost:8080/api/tools/list");
    /// ```
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// 校验配置
    ///
    /// # 错误
    /// - `ConfigError::InvalidUrl`: 地址不是 http/https
    /// - `ConfigError::InvalidValue`: 超时为0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.base_url.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    /// 默认配置: 本地后端, 15秒超时
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
