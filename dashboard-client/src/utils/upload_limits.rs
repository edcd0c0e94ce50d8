//! 文件上传限制
//!
//! 与后端配置保持一致:
//! - 单个文件最大 2GB
//! - 多文件上传总大小最大 10GB
//! - 图标文件最大 2MB
//! - 一次最多上传 10 个文件

use serde::Serialize;

use crate::models::ApiError;

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const GB: u64 = 1024 * MB;

/// 单个文件最大字节数
pub const MAX_FILE_SIZE: u64 = 2 * GB;

/// 多文件上传总大小最大字节数
pub const MAX_TOTAL_SIZE: u64 = 10 * GB;

/// 图标文件最大字节数
pub const MAX_ICON_SIZE: u64 = 2 * MB;

/// 一次最多上传的文件数
pub const MAX_FILES: usize = 10;

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// 格式化文件大小
///
/// 保留两位小数并去掉末尾的0,超过GB的数值仍以GB表示。
///
/// # 示例
/// ```
/// use tool_dashboard::utils::upload_limits::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    while unit + 1 < SIZE_UNITS.len() && bytes >= KB.pow(unit as u32 + 1) {
        unit += 1;
    }

    let value = bytes as f64 / KB.pow(unit as u32) as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// 校验单个文件大小
pub fn validate_file_size(size: u64, max_size: u64) -> bool {
    size <= max_size
}

/// 校验多文件总大小
///
/// 累加溢出视为超限
pub fn validate_total_size(sizes: &[u64], max_size: u64) -> bool {
    sizes
        .iter()
        .try_fold(0u64, |total, size| total.checked_add(*size))
        .map_or(false, |total| total <= max_size)
}

/// 校验文件数量
pub fn validate_file_count(count: usize) -> bool {
    count <= MAX_FILES
}

/// 超限时返回 `ApiError::FileTooLarge`
pub fn ensure_within_limit(size: u64, limit: u64) -> Result<(), ApiError> {
    if validate_file_size(size, limit) {
        Ok(())
    } else {
        Err(ApiError::FileTooLarge { size, limit })
    }
}

/// 文件限制提示文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLimitHints {
    pub single: String,
    pub total: String,
    pub count: String,
    pub icon: String,
}

/// 获取文件限制提示文本
pub fn file_limit_hints() -> FileLimitHints {
    FileLimitHints {
        single: format!("单个文件最大 {}", format_file_size(MAX_FILE_SIZE)),
        total: format!("总大小最大 {}", format_file_size(MAX_TOTAL_SIZE)),
        count: format!("最多一次选择 {} 个文件", MAX_FILES),
        icon: format!("图标文件最大 {}", format_file_size(MAX_ICON_SIZE)),
    }
}
