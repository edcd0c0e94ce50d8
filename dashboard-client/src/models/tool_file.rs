use serde::{Deserialize, Serialize};

use crate::models::VersionRuleError;
use crate::utils::file_paths::{download_url, download_url_by_file_path};
use crate::utils::version::create_version_validation_rule;

/// 工具文件
///
/// 某个工具在特定版本和架构下的一个可下载制品。
/// `download_url` / `download_url_by_path` 由后端生成,也可以本地补全。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub tool_id: i64,

    /// 存储时的文件名
    pub file_name: String,

    /// 上传时的原始文件名
    pub original_name: String,

    /// 相对存储路径: `{type}/{name}/{version}[/{arch}]/{file}`
    pub file_path: String,

    /// 文件大小 (字节)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// 架构类型 (如 linux_x64, windows_x64)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,

    /// 通过ID下载
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    /// 通过路径下载
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url_by_path: Option<String>,
}

impl ToolFile {
    /// 校验版本号
    ///
    /// 文件版本号必填,且必须符合语义化版本规范
    pub fn validate_version(&self) -> Result<(), VersionRuleError> {
        create_version_validation_rule(true).validate(self.version.as_deref())
    }

    /// 补全下载地址
    ///
    /// - 有ID时填充 `download_url`
    /// - 有存储路径时填充 `download_url_by_path` (反斜杠统一为正斜杠)
    pub fn fill_download_urls(&mut self) {
        if let Some(id) = self.id {
            self.download_url = Some(download_url(id));
        }
        if !self.file_path.is_empty() {
            self.download_url_by_path = Some(download_url_by_file_path(&self.file_path));
        }
    }
}
