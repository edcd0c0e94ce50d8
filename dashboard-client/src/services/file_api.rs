use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde::de::IgnoredAny;

use crate::models::{ApiError, FileUpload, PageQuery, PageResponse, ToolFile};
use crate::services::api_client::require_data;
use crate::services::ApiClient;
use crate::utils::file_paths::download_url_by_path;
use crate::utils::upload_limits::{ensure_within_limit, MAX_FILE_SIZE};
use crate::utils::version::create_version_validation_rule;

/// 工具文件接口
pub struct FileApi {
    client: Arc<ApiClient>,
}

impl FileApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 根据工具ID查询文件列表
    ///
    /// 缺失的下载地址会在本地补全
    pub async fn by_tool(&self, tool_id: i64) -> Result<Vec<ToolFile>, ApiError> {
        let mut files: Vec<ToolFile> = self
            .client
            .get(&format!("/files/tool/{}", tool_id))
            .await?
            .unwrap_or_default();
        for file in files.iter_mut().filter(|f| f.download_url.is_none()) {
            file.fill_download_urls();
        }
        Ok(files)
    }

    /// 分页查询文件列表
    pub async fn page(&self, query: &PageQuery) -> Result<PageResponse<ToolFile>, ApiError> {
        let path = "/files/page";
        require_data(self.client.get_with_query(path, query).await?, path)
    }

    /// 上传文件
    ///
    /// 发出请求前校验:
    /// - 版本号必填且符合语义化版本规范
    /// - 文件不超过 2GB
    ///
    /// # 错误
    /// - `ApiError::Validation`: 版本号不合规
    /// - `ApiError::FileTooLarge`: 超过单文件上限
    pub async fn upload(&self, upload: FileUpload) -> Result<ToolFile, ApiError> {
        create_version_validation_rule(true).validate(Some(&upload.version))?;
        ensure_within_limit(upload.size(), MAX_FILE_SIZE)?;

        tracing::info!(
            tool_id = upload.tool_id,
            file_name = %upload.file_name,
            version = %upload.version,
            size = upload.size(),
            "上传工具文件"
        );

        let FileUpload {
            tool_id,
            file_name,
            content,
            version,
            architecture,
            description,
            uploader,
        } = upload;

        let mut form = Form::new()
            .part("file", Part::bytes(content).file_name(file_name))
            .text("toolId", tool_id.to_string())
            .text("version", version);
        if let Some(architecture) = architecture {
            form = form.text("architecture", architecture);
        }
        if let Some(description) = description {
            form = form.text("description", description);
        }
        if let Some(uploader) = uploader {
            form = form.text("uploader", uploader);
        }

        let path = "/files/upload";
        let mut file: ToolFile = require_data(self.client.post_multipart(path, form).await?, path)?;
        if file.download_url.is_none() {
            file.fill_download_urls();
        }
        Ok(file)
    }

    /// 删除文件
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete::<IgnoredAny>(&format!("/files/{}", id))
            .await?;
        tracing::info!(file_id = id, "文件已删除");
        Ok(())
    }

    /// 通过路径下载文件
    ///
    /// 工具类型和名称会自动安全化
    pub async fn download_by_path(
        &self,
        tool_type: &str,
        tool_name: &str,
        file_name: &str,
    ) -> Result<Vec<u8>, ApiError> {
        let url = download_url_by_path(tool_type, tool_name, file_name);
        // 下载地址以 /api 开头,相对于接口根地址去掉该前缀
        let path = url.strip_prefix("/api").unwrap_or(&url);
        Ok(self.client.get_bytes(path).await?.bytes)
    }
}
