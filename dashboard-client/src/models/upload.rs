use serde::{Deserialize, Serialize};

/// 待上传的工具文件
///
/// 对应 `/files/upload` 的 multipart 表单字段
#[derive(Clone, PartialEq)]
pub struct FileUpload {
    pub tool_id: i64,
    pub file_name: String,
    pub content: Vec<u8>,
    pub version: String,
    pub architecture: Option<String>,
    pub description: Option<String>,
    pub uploader: Option<String>,
}

impl FileUpload {
    pub fn new(
        tool_id: i64,
        file_name: impl Into<String>,
        content: Vec<u8>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            tool_id,
            file_name: file_name.into(),
            content,
            version: version.into(),
            architecture: None,
            description: None,
            uploader: None,
        }
    }

    /// 设置架构类型 (构建器模式)
    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }

    /// 设置文件说明 (构建器模式)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 设置上传者 (构建器模式)
    pub fn with_uploader(mut self, uploader: impl Into<String>) -> Self {
        self.uploader = Some(uploader.into());
        self
    }

    /// 文件大小 (字节)
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

// 不输出文件内容
impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("tool_id", &self.tool_id)
            .field("file_name", &self.file_name)
            .field("size", &self.size())
            .field("version", &self.version)
            .field("architecture", &self.architecture)
            .finish()
    }
}

/// 图标上传结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconUploadResult {
    pub url: String,
    pub file_name: String,
    pub original_name: String,
    pub relative_path: String,
}
