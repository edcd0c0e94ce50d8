use std::sync::Arc;

use serde::de::IgnoredAny;

use crate::models::{ApiError, LoginRequest, LoginResponse};
use crate::services::ApiClient;

/// 认证接口
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 管理员登录
    ///
    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<Option<LoginResponse>, ApiError> {
        self.client.post("/auth/login", request).await
    }

    /// 管理员登出
    ///
    /// `POST /auth/logout`, 服务端将当前token加入黑名单
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.post_empty::<IgnoredAny>("/auth/logout").await?;
        Ok(())
    }
}
