//! 版本目录
//!
//! 基于版本比较器从工具文件中挑选最新版本、列出全部版本。
//! 格式无效的版本号直接跳过,不参与排序。
//!
//! 排序与 `compare_versions` 一致: 预发布标识忽略大小写比较。
//! 后端 `/tools/latest-version` 按字符编码逐字符比较预发布标识,
//! 大小写混用时两者结果可能不同 (如 `1.0.0-RC` 与 `1.0.0-alpha`:
//! 本模块取 `RC`, 后端取 `alpha`)。需要与后端一致时使用
//! `ToolApi::latest_version`。

use std::cmp::Ordering;

use crate::models::ToolFile;
use crate::utils::version::Version;

/// 从版本号中挑选最高版本
///
/// 相等的版本保留先出现的一个
pub fn highest_version<'a, I>(versions: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut latest: Option<(&'a str, Version)> = None;
    for raw in versions {
        let Ok(parsed) = Version::parse(raw) else {
            continue;
        };
        let newer = latest
            .as_ref()
            .map_or(true, |(_, current)| parsed.compare(current) == Ordering::Greater);
        if newer {
            latest = Some((raw, parsed));
        }
    }
    latest.map(|(raw, _)| raw)
}

/// 工具的最新版本号
///
/// 文件中没有任何有效版本时回退到工具的当前版本
pub fn latest_version(files: &[ToolFile], current_version: Option<&str>) -> Option<String> {
    highest_version(files.iter().filter_map(|f| f.version.as_deref()))
        .or(current_version.filter(|v| !v.trim().is_empty()))
        .map(str::to_string)
}

/// 工具的全部版本号,从新到旧
///
/// 比较结果相等的版本 (仅构建元数据不同) 只保留先出现的一个。
/// 文件中没有任何有效版本时回退到工具的当前版本。
pub fn all_versions(files: &[ToolFile], current_version: Option<&str>) -> Vec<String> {
    let mut parsed: Vec<(&str, Version)> = files
        .iter()
        .filter_map(|f| f.version.as_deref())
        .filter_map(|raw| Version::parse(raw).ok().map(|v| (raw, v)))
        .collect();

    // 稳定排序,相等元素保持原有先后
    parsed.sort_by(|(_, a), (_, b)| b.compare(a));
    parsed.dedup_by(|(_, later), (_, earlier)| later.compare(earlier) == Ordering::Equal);

    if parsed.is_empty() {
        return current_version
            .filter(|v| !v.trim().is_empty())
            .map(|v| vec![v.to_string()])
            .unwrap_or_default();
    }

    parsed.into_iter().map(|(raw, _)| raw.to_string()).collect()
}
