use std::sync::{Arc, RwLock};

use crate::models::{ApiError, LoginRequest, LoginResponse};
use crate::services::AuthApi;
use crate::stores::KeyValueStore;

/// 会话token的存储键
pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const REAL_NAME_KEY: &str = "realName";

/// 当前登录会话
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub real_name: String,
}

/// 用户状态存储
///
/// 管理员登录状态的唯一来源。
/// 启动时从键值存储恢复,登录/登出时同步写回。
pub struct UserStore {
    storage: Arc<dyn KeyValueStore>,
    session: RwLock<Session>,
}

impl UserStore {
    /// 从键值存储恢复会话
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let session = Session {
            token: storage.get(TOKEN_KEY).unwrap_or_default(),
            username: storage.get(USERNAME_KEY).unwrap_or_default(),
            real_name: storage.get(REAL_NAME_KEY).unwrap_or_default(),
        };
        Self {
            storage,
            session: RwLock::new(session),
        }
    }

    /// 登录
    ///
    /// 响应携带数据时保存token、用户名和姓名,否则状态不变。
    ///
    /// # 错误
    /// 透传 `AuthApi::login` 的错误
    pub async fn login(
        &self,
        api: &AuthApi,
        request: &LoginRequest,
    ) -> Result<Option<LoginResponse>, ApiError> {
        let response = api.login(request).await?;

        if let Some(data) = &response {
            self.replace(Session {
                token: data.token.clone(),
                username: data.username.clone(),
                real_name: data.real_name.clone(),
            });
            tracing::info!(username = %data.username, "管理员登录成功");
        }

        Ok(response)
    }

    /// 登出
    ///
    /// 清空内存状态和持久化的三个键
    pub fn logout(&self) {
        let username = self.username();
        self.replace(Session::default());
        tracing::info!(username = %username, "管理员已登出");
    }

    /// 是否已登录
    pub fn is_logged_in(&self) -> bool {
        !self.token().is_empty()
    }

    /// 当前token
    ///
    /// 以键值存储为准: `ApiClient` 收到401时会直接清除存储中的token
    pub fn token(&self) -> String {
        match self.storage.get(TOKEN_KEY) {
            Some(token) => token,
            None => {
                let mut session = self.read();
                if !session.token.is_empty() {
                    session.token.clear();
                    if let Ok(mut current) = self.session.write() {
                        *current = session;
                    }
                }
                String::new()
            }
        }
    }

    pub fn username(&self) -> String {
        self.read().username
    }

    pub fn real_name(&self) -> String {
        self.read().real_name
    }

    pub fn session(&self) -> Session {
        self.read()
    }

    fn read(&self) -> Session {
        self.session
            .read()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    fn replace(&self, session: Session) {
        let entries = [
            (TOKEN_KEY, &session.token),
            (USERNAME_KEY, &session.username),
            (REAL_NAME_KEY, &session.real_name),
        ];
        for (key, value) in entries {
            let result = if value.is_empty() {
                self.storage.remove(key)
            } else {
                self.storage.set(key, value)
            };
            if let Err(e) = result {
                tracing::error!(key = key, error = %e, "会话持久化失败");
            }
        }

        if let Ok(mut current) = self.session.write() {
            *current = session;
        }
    }
}
