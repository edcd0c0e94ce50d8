use std::env;
use std::path::PathBuf;

use crate::models::client_config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::models::{ClientConfig, ConfigError};

pub const ENV_BASE_URL: &str = "DASHBOARD_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "DASHBOARD_API_TIMEOUT_SECS";
pub const ENV_STORE_PATH: &str = "DASHBOARD_STORE_PATH";

/// 配置服务
///
/// 职责单一: 从 .env 文件和环境变量组装 `ClientConfig`
pub struct ConfigService;

impl ConfigService {
    /// 加载客户端配置
    ///
    /// 先加载当前目录 (或上层目录) 的 .env, 再读取环境变量:
    /// - DASHBOARD_API_BASE_URL: 接口根地址 (默认: http://localhost:8080/api)
    /// - DASHBOARD_API_TIMEOUT_SECS: 请求超时秒数 (默认: 15)
    /// - DASHBOARD_STORE_PATH: 本地存储文件 (可选)
    ///
    /// # 错误处理
    /// - .env 不存在时忽略
    /// - .env 格式错误时返回 IoError
    /// - 取值无效时返回 InvalidValue / InvalidUrl
    pub fn load() -> Result<ClientConfig, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::info!(path = %path.display(), "已加载 .env 配置文件");
            }
            Err(e) if e.not_found() => {
                tracing::debug!("未找到 .env 文件,仅使用环境变量");
            }
            Err(e) => return Err(ConfigError::IoError(e.to_string())),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过查找函数组装配置
    ///
    /// 与进程环境解耦,便于测试
    pub fn from_lookup<F>(lookup: F) -> Result<ClientConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = value(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match value(ENV_TIMEOUT_SECS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS.to_string(),
                    value: raw.clone(),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let mut config = ClientConfig::new(base_url.trim()).with_timeout_secs(timeout_secs);
        if let Some(path) = value(ENV_STORE_PATH) {
            config = config.with_store_path(PathBuf::from(path));
        }

        config.validate()?;

        tracing::info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "客户端配置加载完成"
        );
        Ok(config)
    }
}
