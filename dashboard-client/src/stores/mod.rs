//! 状态存储模块
//!
//! - `kv_store`: 键值持久化能力 (内存 / JSON文件)
//! - `user_store`: 管理员登录会话
//! - `theme_store`: 界面主题
//!
//! 浏览器全局对象 (localStorage、document) 都以注入的能力表达,
//! 不存在任何全局可变状态。

pub mod kv_store;
pub mod theme_store;
pub mod user_store;

pub use kv_store::{FileStore, KeyValueStore, MemoryStore};
pub use theme_store::{DocumentAttributes, ThemeStore, ThemeTarget, ThemeType, THEME_KEY};
pub use user_store::{Session, UserStore, REAL_NAME_KEY, TOKEN_KEY, USERNAME_KEY};
