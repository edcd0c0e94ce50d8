use std::sync::Arc;

use crate::models::ClientConfig;
use crate::router::{HistoryNavigator, Navigator, Router};
use crate::services::{
    ApiClient, AuthApi, ChangeLogApi, FileApi, IconApi, ToolApi, UploadApi,
};
use crate::stores::{
    DocumentAttributes, FileStore, KeyValueStore, ThemeStore, ThemeTarget, UserStore,
};

/// 应用全局状态
///
/// 每个字段代表客户端核心能力的单一来源:
/// - storage: 本地键值持久化
/// - user / theme: 会话与主题状态
/// - router: 路由与登录守卫
/// - 各接口封装共享同一个 `ApiClient`
pub struct AppState {
    pub storage: Arc<dyn KeyValueStore>,
    pub user: Arc<UserStore>,
    pub theme: Arc<ThemeStore>,
    pub router: Arc<Router>,
    pub client: Arc<ApiClient>,
    pub auth_api: AuthApi,
    pub tool_api: ToolApi,
    pub file_api: FileApi,
    pub changelog_api: ChangeLogApi,
    pub upload_api: UploadApi,
    pub icon_api: IconApi,
}

impl AppState {
    /// 使用注入的能力组装应用状态
    ///
    /// # 错误处理
    /// 任何服务初始化失败都将导致整个状态无法创建
    pub fn new(
        config: ClientConfig,
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        theme_target: Arc<dyn ThemeTarget>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let client = Arc::new(ApiClient::new(
            config,
            Arc::clone(&storage),
            Arc::clone(&navigator),
        )?);

        let user = Arc::new(UserStore::new(Arc::clone(&storage)));
        let theme = Arc::new(ThemeStore::new(Arc::clone(&storage), theme_target));
        theme.init_theme();

        let router = Arc::new(Router::with_dashboard_routes(navigator, Arc::clone(&user)));

        tracing::info!(
            base_url = %client.config().base_url,
            logged_in = user.is_logged_in(),
            theme = %theme.theme(),
            "AppState initialized"
        );

        Ok(Self {
            storage,
            user,
            theme,
            router,
            auth_api: AuthApi::new(Arc::clone(&client)),
            tool_api: ToolApi::new(Arc::clone(&client)),
            file_api: FileApi::new(Arc::clone(&client)),
            changelog_api: ChangeLogApi::new(Arc::clone(&client)),
            upload_api: UploadApi::new(Arc::clone(&client)),
            icon_api: IconApi::new(Arc::clone(&client)),
            client,
        })
    }

    /// 无界面环境的默认组装
    ///
    /// 使用文件存储 (配置路径或系统数据目录)、内存导航历史和内存文档模型
    pub fn headless(config: ClientConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let path = match &config.store_path {
            Some(path) => path.clone(),
            None => FileStore::default_path()?,
        };
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(path)?);
        Self::new(
            config,
            storage,
            Arc::new(HistoryNavigator::new()),
            Arc::new(DocumentAttributes::new()),
        )
    }

    /// 登出: 通知服务端后清除本地会话
    ///
    /// 服务端登出失败不影响本地清除
    pub async fn logout(&self) {
        if let Err(e) = self.auth_api.logout().await {
            tracing::warn!(error = %e, "服务端登出失败,仍清除本地会话");
        }
        self.user.logout();
    }
}
