//! 路由模块
//!
//! 路由表声明与登录守卫。
//! 标题和跳转都通过注入的 `Navigator` 完成,守卫本身只做判断。

pub mod navigator;
pub mod routes;

use std::sync::Arc;

pub use navigator::{HistoryNavigator, Navigator};
pub use routes::{dashboard_routes, RouteMatch, RouteRecord};

use crate::stores::UserStore;
use crate::utils::file_paths::encode_uri_component;

/// 默认文档标题
pub const DEFAULT_TITLE: &str = "工具看板系统";

/// 登录页地址
pub const LOGIN_PATH: &str = "/login";

/// 守卫的判断结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// 放行
    Proceed,
    /// 重定向到指定地址
    Redirect(String),
}

/// 路由器
pub struct Router {
    routes: Vec<RouteRecord>,
    navigator: Arc<dyn Navigator>,
    user_store: Arc<UserStore>,
}

impl Router {
    pub fn new(
        routes: Vec<RouteRecord>,
        navigator: Arc<dyn Navigator>,
        user_store: Arc<UserStore>,
    ) -> Self {
        Self {
            routes,
            navigator,
            user_store,
        }
    }

    /// 使用看板路由表创建
    pub fn with_dashboard_routes(navigator: Arc<dyn Navigator>, user_store: Arc<UserStore>) -> Self {
        Self::new(dashboard_routes(), navigator, user_store)
    }

    /// 解析地址,查询串和锚点不参与匹配
    pub fn resolve(&self, full_path: &str) -> Option<RouteMatch<'_>> {
        routes::find_match(&self.routes, &routes::path_segments(full_path))
    }

    /// 前置守卫
    ///
    /// 1. 设置文档标题 (未匹配或无标题时使用默认标题)
    /// 2. 需要登录的路由在没有token时重定向到
    ///    `/login?redirect=<编码后的完整地址>`
    pub fn before_each(&self, full_path: &str) -> NavigationDecision {
        let matched = self.resolve(full_path);

        let title = matched
            .as_ref()
            .and_then(|m| m.title())
            .unwrap_or(DEFAULT_TITLE);
        self.navigator.set_title(title);

        let require_auth = matched.as_ref().map_or(false, |m| m.require_auth());
        if require_auth && self.user_store.token().is_empty() {
            tracing::info!(path = %full_path, "未登录访问受保护页面,重定向到登录页");
            return NavigationDecision::Redirect(format!(
                "{}?redirect={}",
                LOGIN_PATH,
                encode_uri_component(full_path)
            ));
        }

        NavigationDecision::Proceed
    }

    /// 导航到指定地址
    ///
    /// 经过守卫后跳转到最终地址,重定向目标本身也再经过一次守卫
    /// (登录页不需要登录,不会循环)
    pub fn navigate(&self, full_path: &str) -> NavigationDecision {
        let decision = self.before_each(full_path);
        match &decision {
            NavigationDecision::Proceed => self.navigator.push(full_path),
            NavigationDecision::Redirect(target) => {
                self.before_each(target);
                self.navigator.push(target);
            }
        }
        decision
    }
}
