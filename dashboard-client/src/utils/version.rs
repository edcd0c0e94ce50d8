//! 版本比较工具
//!
//! 遵循语义化版本规范 2.0.0 (https://semver.org/):
//! - 版本号格式校验 `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`
//! - 版本大小比较
//! - 版本号说明文本
//! - 表单校验规则描述
//!
//! 所有函数都是纯函数,不持有任何可变状态。

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{VersionError, VersionRuleError};

/// 语义化版本正则表达式
///
/// 数字部分使用 `[0-9]` 而非 `\d`,避免匹配到非ASCII数字。
static SEMVER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
        r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
        r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    ))
    .expect("语义化版本正则表达式无效")
});

/// 无效版本号的说明文本
pub const INVALID_VERSION_DESCRIPTION: &str = "无效的版本号格式";

/// 数字版本段
///
/// 保存原始数字文本,不受整数位宽限制。语法禁止前导零,
/// 因此先比较长度、再逐字符比较即等价于数值比较。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericIdentifier(String);

impl NumericIdentifier {
    fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(digits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 数值在 u64 范围内时返回该值
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Ord for NumericIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for NumericIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NumericIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 版本号
///
/// 构建元数据 (`+` 之后的部分) 在解析前即被丢弃,不参与比较也不保存。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: NumericIdentifier,
    pub minor: NumericIdentifier,
    pub patch: NumericIdentifier,
    /// 预发布标识 (如 "rc.1"),作为整体字符串参与比较
    pub pre_release: Option<String>,
}

impl Version {
    /// 从字符串解析版本号 (如 "1.2.3-beta.1+build.5")
    ///
    /// 先校验格式,不符合规范的字符串不会产生 `Version`。
    ///
    /// # 错误
    /// 返回 `VersionError::InvalidVersion` 如果格式不符合语义化版本规范
    pub fn parse(version_str: &str) -> Result<Self, VersionError> {
        if !is_valid_semantic_version(Some(version_str)) {
            return Err(VersionError::InvalidVersion {
                argument: "version".to_string(),
                value: version_str.to_string(),
            });
        }
        parse_version(version_str)
    }

    /// 比较版本大小
    ///
    /// 主版本、次版本、修订号依次按数值比较;
    /// 三者相同时,正式版本高于预发布版本;
    /// 两者均为预发布版本时,按区域敏感的字符串顺序比较预发布标识。
    pub fn compare(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (&self.pre_release, &other.pre_release) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => locale_compare(a, b),
            })
    }

    /// 是否满足最低版本要求
    pub fn satisfies(&self, required: &Version) -> bool {
        self.compare(required) != Ordering::Less
    }

    /// 是否为预发布版本
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

/// 校验版本号是否符合语义化版本规范
///
/// 输入先去除首尾空白再匹配。`None`、空串以及任何不匹配的字符串都返回 `false`,
/// 本函数从不报错。
///
/// # 示例
/// ```
/// use tool_dashboard::utils::version::is_valid_semantic_version;
///
/// assert!(is_valid_semantic_version(Some("1.0.0-beta.1+20130313144700")));
/// assert!(!is_valid_semantic_version(Some("01.2.3")));
/// assert!(!is_valid_semantic_version(None));
/// ```
pub fn is_valid_semantic_version(version: Option<&str>) -> bool {
    match version {
        Some(v) if !v.trim().is_empty() => SEMVER_REGEX.is_match(v.trim()),
        _ => false,
    }
}

/// 解析版本号字符串
///
/// 调用方必须先通过 `is_valid_semantic_version` 校验。
/// 若收到未经校验的字符串则显式报错,不做静默转换。
fn parse_version(version: &str) -> Result<Version, VersionError> {
    let mut clean = version.trim();

    // 移除构建元数据
    if let Some(plus) = clean.find('+').filter(|&i| i > 0) {
        clean = &clean[..plus];
    }

    // 分离预发布标识
    let mut pre_release = None;
    if let Some(dash) = clean.find('-').filter(|&i| i > 0) {
        pre_release = Some(clean[dash + 1..].to_string());
        clean = &clean[..dash];
    }

    let parts: Vec<&str> = clean.split('.').collect();
    if parts.len() != 3 {
        return Err(VersionError::Malformed(version.to_string()));
    }

    let number = |part: &str| {
        NumericIdentifier::parse(part).ok_or_else(|| VersionError::Malformed(version.to_string()))
    };

    Ok(Version {
        major: number(parts[0])?,
        minor: number(parts[1])?,
        patch: number(parts[2])?,
        pre_release,
    })
}

/// 区域敏感的字符串比较
///
/// 先忽略大小写逐字符比较,完全相同时小写字母排在大写字母之前。
/// 预发布标识只含 ASCII 字母、数字、`-` 和 `.`,此规则与浏览器默认排序一致。
fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()));
    if primary != Ordering::Equal {
        return primary;
    }

    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map(|(x, _)| {
            if x.is_ascii_lowercase() {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        })
        .unwrap_or(Ordering::Equal)
}

/// 校验并解析比较参数
fn checked(argument: &str, value: &str) -> Result<Version, VersionError> {
    if !is_valid_semantic_version(Some(value)) {
        return Err(VersionError::InvalidVersion {
            argument: argument.to_string(),
            value: value.to_string(),
        });
    }
    parse_version(value)
}

/// 比较两个语义化版本号的大小
///
/// # 返回值
/// - `Ordering::Greater`: version1 > version2
/// - `Ordering::Equal`: 两者相等 (构建元数据不参与比较)
/// - `Ordering::Less`: version1 < version2
///
/// # 错误
/// 任一参数格式不正确时返回 `VersionError::InvalidVersion`,包含参数名和原始值。
///
/// # 示例
/// ```
/// use std::cmp::Ordering;
/// use tool_dashboard::utils::version::compare_versions;
///
/// assert_eq!(compare_versions("1.0.0", "1.0.0-alpha").unwrap(), Ordering::Greater);
/// assert_eq!(compare_versions("1.0.0+001", "1.0.0+002").unwrap(), Ordering::Equal);
/// assert!(compare_versions("1.0.0", "bad-version").is_err());
/// ```
pub fn compare_versions(version1: &str, version2: &str) -> Result<Ordering, VersionError> {
    let v1 = checked("version1", version1)?;
    let v2 = checked("version2", version2)?;
    Ok(v1.compare(&v2))
}

/// 按完整的语义化版本 2.0.0 优先级比较
///
/// 与 `compare_versions` 的区别在于预发布标识按点分段比较,
/// 数字段按数值比较 (`alpha.2 < alpha.10`)。
///
/// # 错误
/// 与 `compare_versions` 相同。
pub fn compare_versions_strict(version1: &str, version2: &str) -> Result<Ordering, VersionError> {
    let v1 = checked("version1", version1)?;
    let v2 = checked("version2", version2)?;

    // 空的预发布标识高于任何非空标识
    let pre = |v: &Version| {
        semver::Prerelease::new(v.pre_release.as_deref().unwrap_or_default())
            .map_err(|e| VersionError::Malformed(format!("{}: {}", v, e)))
    };
    let (pre1, pre2) = (pre(&v1)?, pre(&v2)?);

    Ok(v1
        .major
        .cmp(&v2.major)
        .then_with(|| v1.minor.cmp(&v2.minor))
        .then_with(|| v1.patch.cmp(&v2.patch))
        .then_with(|| pre1.cmp(&pre2)))
}

/// 获取版本号说明信息
///
/// # 示例
/// ```
/// use tool_dashboard::utils::version::get_version_description;
///
/// assert_eq!(
///     get_version_description("1.2.3-rc.1"),
///     "主版本: 1, 次版本: 2, 修订号: 3, 预发布: rc.1"
/// );
/// assert_eq!(get_version_description("nope"), "无效的版本号格式");
/// ```
pub fn get_version_description(version: &str) -> String {
    let parts = match Version::parse(version) {
        Ok(parts) => parts,
        Err(_) => return INVALID_VERSION_DESCRIPTION.to_string(),
    };

    let mut desc = format!(
        "主版本: {}, 次版本: {}, 修订号: {}",
        parts.major, parts.minor, parts.patch
    );
    if let Some(pre) = &parts.pre_release {
        desc.push_str(&format!(", 预发布: {}", pre));
    }
    desc
}

/// 版本号表单校验规则
///
/// 只是一份描述: 是否必填、触发时机和一个与界面框架无关的校验函数。
/// 由外部的适配层接入具体的表单库。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionValidationRule {
    pub required: bool,
    pub trigger: &'static str,
}

impl VersionValidationRule {
    /// 校验输入值
    ///
    /// # 错误
    /// - `VersionRuleError::Required`: 必填但输入为空
    /// - `VersionRuleError::InvalidFormat`: 输入不符合语义化版本规范
    pub fn validate(&self, value: Option<&str>) -> Result<(), VersionRuleError> {
        let value = value.unwrap_or_default();
        if value.trim().is_empty() {
            return if self.required {
                Err(VersionRuleError::Required)
            } else {
                Ok(())
            };
        }

        if is_valid_semantic_version(Some(value)) {
            Ok(())
        } else {
            Err(VersionRuleError::InvalidFormat)
        }
    }

    /// 以闭包形式返回校验函数,便于适配层直接挂载
    pub fn validator(&self) -> impl Fn(Option<&str>) -> Result<(), VersionRuleError> {
        let rule = *self;
        move |value| rule.validate(value)
    }
}

impl Default for VersionValidationRule {
    /// 默认必填
    fn default() -> Self {
        create_version_validation_rule(true)
    }
}

/// 生成版本号校验规则
pub fn create_version_validation_rule(required: bool) -> VersionValidationRule {
    VersionValidationRule {
        required,
        trigger: "blur",
    }
}
