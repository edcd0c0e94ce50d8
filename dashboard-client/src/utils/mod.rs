//! 工具函数模块
//!
//! - `version`: 语义化版本校验与比较
//! - `upload_limits`: 文件上传限制与大小格式化
//! - `file_paths`: 文件名安全化、下载地址、图标路径
//! - `logger`: 日志系统初始化

pub mod file_paths;
pub mod logger;
pub mod upload_limits;
pub mod version;
