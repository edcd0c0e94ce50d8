use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::models::{ApiError, ApiResponse, ClientConfig, UNAUTHORIZED_CODE};
use crate::router::{Navigator, LOGIN_PATH};
use crate::stores::{KeyValueStore, TOKEN_KEY};

/// REST传输层
///
/// 职责:
/// - 拼接接口地址,设置超时
/// - 存在token时附加 `Authorization: Bearer <token>`
/// - 拆解统一响应体 `{code, message, data}`
/// - `code == 401` 时清除本地token并跳转登录页
///
/// 每次调用都是单步转发,没有重试和退避。
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    storage: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
}

/// 原始响应体 (文件、图片)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobResponse {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl ApiClient {
    /// 创建客户端
    ///
    /// # 错误
    /// - `ApiError::Validation`: 配置无效
    /// - `ApiError::NetworkFailed`: HTTP客户端构建失败
    pub fn new(
        config: ClientConfig,
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        config
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let http = Client::builder().timeout(config.timeout()).build()?;

        tracing::info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "API client initialized"
        );

        Ok(Self {
            http,
            config,
            storage,
            navigator,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.endpoint(path));
        match self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty()) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// 发送请求并拆解统一响应体
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        tracing::debug!(method = %method, path = %path, "Sending request");

        let response = builder.send().await.map_err(|e| {
            tracing::error!(method = %method, path = %path, error = %e, "请求错误");
            ApiError::from(e)
        })?;

        let status = response.status();
        let body = response.bytes().await?;

        // 先按通用JSON拆解,状态码判断不受 data 结构影响
        let envelope: ApiResponse<Value> = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => {
                tracing::error!(path = %path, error = %e, "响应解析失败");
                return Err(ApiError::from(e));
            }
            Err(_) => {
                tracing::error!(path = %path, status = status.as_u16(), "响应错误");
                return Err(ApiError::HttpStatusError {
                    status: status.as_u16(),
                    message: String::from_utf8_lossy(&body).into_owned(),
                });
            }
        };

        if !envelope.is_success() {
            tracing::warn!(
                path = %path,
                code = envelope.code,
                message = %envelope.error_message(),
                "请求失败"
            );
            if envelope.code == UNAUTHORIZED_CODE {
                self.handle_unauthorized();
            }
        }

        match envelope.into_result()? {
            None | Some(Value::Null) => Ok(None),
            Some(data) => serde_json::from_value(data).map(Some).map_err(|e| {
                tracing::error!(path = %path, error = %e, "响应数据解析失败");
                ApiError::from(e)
            }),
        }
    }

    /// 登录失效: 清除token并跳转登录页
    fn handle_unauthorized(&self) {
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            tracing::error!(error = %e, "清除token失败");
        }
        self.navigator.push(LOGIN_PATH);
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        let builder = self.request(Method::GET, path);
        self.send(Method::GET, path, builder).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).query(query);
        self.send(Method::GET, path, builder).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path).json(body);
        self.send(Method::POST, path, builder).await
    }

    /// 无请求体的POST
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        let builder = self.request(Method::POST, path);
        self.send(Method::POST, path, builder).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PUT, path).json(body);
        self.send(Method::PUT, path, builder).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        let builder = self.request(Method::DELETE, path);
        self.send(Method::DELETE, path, builder).await
    }

    /// 以 multipart/form-data 提交
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<Option<T>, ApiError> {
        let builder = self.request(Method::POST, path).multipart(form);
        self.send(Method::POST, path, builder).await
    }

    /// 获取原始响应体
    ///
    /// 文件和图片不使用统一响应体,直接返回字节
    ///
    /// # 错误
    /// - `ApiError::HttpStatusError`: 非2xx状态码
    pub async fn get_bytes(&self, path: &str) -> Result<BlobResponse, ApiError> {
        tracing::debug!(path = %path, "Fetching blob");

        let response = self.request(Method::GET, path).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatusError {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("请求失败")
                    .to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();

        Ok(BlobResponse {
            bytes,
            content_type,
        })
    }
}

/// 要求响应携带数据
///
/// # 错误
/// 返回 `ApiError::InvalidResponse` 如果 `data` 缺失
pub(crate) fn require_data<T>(data: Option<T>, path: &str) -> Result<T, ApiError> {
    data.ok_or_else(|| ApiError::InvalidResponse(format!("{} 响应缺少data字段", path)))
}
