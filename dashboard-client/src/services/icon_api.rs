use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::models::ApiError;
use crate::services::api_client::BlobResponse;
use crate::services::ApiClient;
use crate::utils::file_paths::{resolve_icon_source, IconSource};

/// 图标接口
pub struct IconApi {
    client: Arc<ApiClient>,
}

impl IconApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 获取图标数据
    ///
    /// `GET /icon/{path}`, 返回原始字节
    pub async fn icon_data(&self, path: &str) -> Result<BlobResponse, ApiError> {
        self.client
            .get_bytes(&format!("/icon/{}", path.trim_start_matches('/')))
            .await
    }

    /// 获取图标的 data URL
    ///
    /// 完整URL直接返回; 相对路径经接口取回后编码为
    /// `data:<mime>;base64,...`。失败时返回空串,不向上传播错误。
    pub async fn icon_data_url(&self, url: &str) -> String {
        let relative = match resolve_icon_source(url) {
            IconSource::Absolute(url) => return url,
            IconSource::Relative(path) => path,
        };

        match self.icon_data(&relative).await {
            Ok(blob) => to_data_url(&blob, &relative),
            Err(e) => {
                tracing::warn!(path = %relative, error = %e, "获取图标失败");
                String::new()
            }
        }
    }
}

/// 编码为 data URL
///
/// 响应未声明类型时按扩展名推断
pub fn to_data_url(blob: &BlobResponse, path: &str) -> String {
    let mime = blob
        .content_type
        .clone()
        .unwrap_or_else(|| mime_from_extension(path).to_string());
    format!("data:{};base64,{}", mime, STANDARD.encode(&blob.bytes))
}

fn mime_from_extension(path: &str) -> &'static str {
    let ext = path
        .rsplit('.')
        .next()
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
