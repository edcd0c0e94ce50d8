//! 文件路径与下载地址
//!
//! 文件名安全化规则与后端保持一致,
//! 保证前端拼出的下载地址与服务端存储路径一致。

use once_cell::sync::Lazy;
use regex::Regex;

/// 文件系统不支持的字符
static FORBIDDEN_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\/:*?"<>|]"#).expect("非法字符正则无效"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("空白正则无效"));

/// 文件下载接口前缀
const DOWNLOAD_PREFIX: &str = "/api/files/download";

/// 文件名安全化 (用于目录名)
///
/// 替换非法字符和空白为 `_`, 并转为小写。空名称返回 `unknown`。
///
/// # 示例
/// ```
/// use tool_dashboard::utils::file_paths::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("My Tool: v2"), "my_tool__v2");
/// assert_eq!(sanitize_file_name(""), "unknown");
/// ```
pub fn sanitize_file_name(name: &str) -> String {
    if name.is_empty() {
        return "unknown".to_string();
    }
    let replaced = FORBIDDEN_CHARS.replace_all(name, "_");
    WHITESPACE.replace_all(&replaced, "_").to_lowercase()
}

/// 文件名安全化 (用于实际文件名)
///
/// 只替换非法字符,保留中文、大小写和空格。空名称返回 `unknown.file`。
pub fn sanitize_file_name_keep_readable(name: &str) -> String {
    if name.is_empty() {
        return "unknown.file".to_string();
    }
    FORBIDDEN_CHARS.replace_all(name, "_").into_owned()
}

/// 通过ID下载的地址
pub fn download_url(id: i64) -> String {
    format!("{}/{}", DOWNLOAD_PREFIX, id)
}

/// 通过路径下载的地址
///
/// 工具类型和名称会自动安全化,文件名原样保留
pub fn download_url_by_path(tool_type: &str, tool_name: &str, file_name: &str) -> String {
    format!(
        "{}-by-path/{}/{}/{}",
        DOWNLOAD_PREFIX,
        sanitize_file_name(tool_type),
        sanitize_file_name(tool_name),
        file_name
    )
}

/// 由存储路径生成下载地址
///
/// 反斜杠统一为正斜杠
pub fn download_url_by_file_path(file_path: &str) -> String {
    format!("{}-by-path/{}", DOWNLOAD_PREFIX, file_path.replace('\\', "/"))
}

/// 文件存储的相对路径
///
/// 格式: `{toolType}/{toolName}/{version}[/{architecture}]/{fileName}`,
/// 目录部分均经过安全化处理。工具类型为空时使用 `default`。
pub fn storage_path(
    tool_type: Option<&str>,
    tool_name: &str,
    version: &str,
    architecture: Option<&str>,
    file_name: &str,
) -> String {
    let mut segments = vec![
        sanitize_file_name(tool_type.unwrap_or("default")),
        sanitize_file_name(tool_name),
        sanitize_file_name(version),
    ];
    if let Some(arch) = architecture.filter(|a| !a.trim().is_empty()) {
        segments.push(sanitize_file_name(arch));
    }
    segments.push(sanitize_file_name_keep_readable(file_name));
    segments.join("/")
}

/// 图标地址来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// 完整URL, 直接使用
    Absolute(String),
    /// 需经 `/icon/{path}` 接口获取的相对路径
    Relative(String),
}

/// 解析图标地址
///
/// 数据库存储格式为 `/files/icons/2025/10/27/xxx.png`,
/// 接口需要的是 `icons/2025/10/27/xxx.png`。
///
/// # 示例
/// ```
/// use tool_dashboard::utils::file_paths::{resolve_icon_source, IconSource};
///
/// assert_eq!(
///     resolve_icon_source("/files/icons/a.png"),
///     IconSource::Relative("icons/a.png".to_string())
/// );
/// ```
pub fn resolve_icon_source(url: &str) -> IconSource {
    if url.starts_with("http://") || url.starts_with("https://") {
        return IconSource::Absolute(url.to_string());
    }
    let relative = url
        .strip_prefix("/files/")
        .or_else(|| url.strip_prefix("/icon/"))
        .unwrap_or(url);
    IconSource::Relative(relative.to_string())
}

/// 按 encodeURIComponent 规则编码
///
/// 保留 `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, 其余字节编码为 `%XX`
pub fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
