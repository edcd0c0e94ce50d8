//! 服务层模块
//!
//! - `api_client`: REST传输层,附加token、拆解统一响应体、处理登录失效
//! - `auth_api` / `tool_api` / `file_api` / `changelog_api` / `upload_api` / `icon_api`:
//!   按资源划分的接口封装
//! - `version_catalog`: 最新版本与版本列表
//! - `config_service`: 客户端配置加载
//!
//! # 服务架构
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  AuthApi ToolApi FileApi ChangeLogApi    │
//! │  UploadApi IconApi                       │
//! └──────────────────┬───────────────────────┘
//!                    ▼
//! ┌──────────────────────────────────────────┐
//! │  ApiClient (reqwest)                     │
//! │   ├─ KeyValueStore  (token)              │
//! │   └─ Navigator      (401 → /login)       │
//! └──────────────────┬───────────────────────┘
//!                    ▼
//!             工具看板后端 REST
//! ```

pub mod api_client;
pub mod auth_api;
pub mod changelog_api;
pub mod config_service;
pub mod file_api;
pub mod icon_api;
pub mod tool_api;
pub mod upload_api;
pub mod version_catalog;

// 重导出常用类型,简化外部引用
pub use api_client::{ApiClient, BlobResponse};
pub use auth_api::AuthApi;
pub use changelog_api::ChangeLogApi;
pub use config_service::ConfigService;
pub use file_api::FileApi;
pub use icon_api::IconApi;
pub use tool_api::ToolApi;
pub use upload_api::UploadApi;
