use std::sync::Arc;

use reqwest::multipart::{Form, Part};

use crate::models::{ApiError, IconUploadResult};
use crate::services::api_client::require_data;
use crate::services::ApiClient;
use crate::utils::upload_limits::{ensure_within_limit, MAX_ICON_SIZE};

/// 图标上传接口
pub struct UploadApi {
    client: Arc<ApiClient>,
}

impl UploadApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 上传工具图标
    ///
    /// # 参数
    /// - `category`: 可选的分类名称 (如工具名、平台名),用于组织文件夹
    ///
    /// # 错误
    /// - `ApiError::FileTooLarge`: 超过 2MB
    pub async fn upload_icon(
        &self,
        content: Vec<u8>,
        file_name: &str,
        category: Option<&str>,
    ) -> Result<IconUploadResult, ApiError> {
        ensure_within_limit(content.len() as u64, MAX_ICON_SIZE)?;

        let mut form = Form::new().part("file", Part::bytes(content).file_name(file_name.to_string()));
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            form = form.text("category", category.to_string());
        }

        let path = "/upload/icon";
        let result: IconUploadResult =
            require_data(self.client.post_multipart(path, form).await?, path)?;
        tracing::info!(url = %result.url, "图标上传成功");
        Ok(result)
    }
}
