use serde::{Deserialize, Serialize};

use crate::models::ApiError;

/// 后端约定的成功状态码
pub const SUCCESS_CODE: i32 = 200;

/// 未登录状态码
pub const UNAUTHORIZED_CODE: i32 = 401;

/// 统一响应体
///
/// 所有REST接口都以 `{code, message, data}` 包装返回
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,

    #[serde(default)]
    pub message: String,

    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// 失败时使用的提示文本
    pub fn error_message(&self) -> String {
        if self.message.is_empty() {
            "请求失败".to_string()
        } else {
            self.message.clone()
        }
    }

    /// 转换为 Result
    ///
    /// # 错误
    /// - `ApiError::Unauthorized`: `code == 401`
    /// - `ApiError::Business`: 其他非200状态码
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self.code {
            SUCCESS_CODE => Ok(self.data),
            UNAUTHORIZED_CODE => Err(ApiError::Unauthorized(self.error_message())),
            code => Err(ApiError::Business {
                code,
                message: self.error_message(),
            }),
        }
    }
}

/// 分页响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub size: u64,
    pub current: u64,
    pub pages: u64,
}

/// 分页查询参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_num: u32,
    pub page_size: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl PageQuery {
    pub fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num,
            page_size,
            tool_id: None,
            keyword: None,
        }
    }

    /// 按工具过滤 (构建器模式)
    pub fn with_tool_id(mut self, tool_id: i64) -> Self {
        self.tool_id = Some(tool_id);
        self
    }

    /// 按关键字过滤 (构建器模式)
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, 10)
    }
}
