//! 数据模型模块
//!
//! 包含所有核心数据结构:
//! - errors: 错误类型定义 (版本、API、存储、配置)
//! - tool / tool_file / change_log: 工具目录的三类实体
//! - admin: 管理员与登录请求/响应
//! - api_response: 统一响应体与分页
//! - upload: 文件/图标上传
//! - client_config: 客户端配置

pub mod admin;
pub mod api_response;
pub mod change_log;
pub mod client_config;
pub mod errors;
pub mod tool;
pub mod tool_file;
pub mod upload;

// 重导出常用类型,简化外部引用
pub use admin::{Admin, LoginRequest, LoginResponse};
pub use api_response::{ApiResponse, PageQuery, PageResponse, SUCCESS_CODE, UNAUTHORIZED_CODE};
pub use change_log::ChangeLog;
pub use client_config::ClientConfig;
pub use errors::{ApiError, ConfigError, StorageError, VersionError, VersionRuleError};
pub use tool::{Tool, ToolGroup};
pub use tool_file::ToolFile;
pub use upload::{FileUpload, IconUploadResult};
