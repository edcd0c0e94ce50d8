//! 工具看板客户端核心
//!
//! 管理后台的非界面部分:
//! - `utils::version`: 语义化版本校验、比较、说明与表单校验规则
//! - `models`: REST载荷与错误类型
//! - `services`: REST传输层与各资源接口
//! - `stores`: 会话与主题状态 (注入的键值持久化)
//! - `router`: 路由表与登录守卫 (注入的导航能力)
//! - `state`: 以上能力的组装

pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;

pub use state::AppState;
pub use utils::version::{
    compare_versions, compare_versions_strict, create_version_validation_rule,
    get_version_description, is_valid_semantic_version, Version, VersionValidationRule,
};
