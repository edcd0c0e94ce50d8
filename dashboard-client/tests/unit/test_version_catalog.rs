use tool_dashboard::models::ToolFile;
use tool_dashboard::services::version_catalog::{all_versions, highest_version, latest_version};

fn file(version: Option<&str>) -> ToolFile {
    ToolFile {
        tool_id: 1,
        file_name: "rg.tar.gz".to_string(),
        original_name: "rg.tar.gz".to_string(),
        version: version.map(str::to_string),
        ..Default::default()
    }
}

fn files(versions: &[&str]) -> Vec<ToolFile> {
    versions.iter().map(|v| file(Some(v))).collect()
}

// ============================================================================
// highest_version 测试
// ============================================================================

#[test]
fn test_highest_version_正式版优先于预发布版() {
    assert_eq!(
        highest_version(["1.0.0-rc.1", "1.0.0", "0.9.9"]),
        Some("1.0.0")
    );
}

#[test]
fn test_highest_version_相等时保留先出现的() {
    assert_eq!(
        highest_version(["2.0.0+linux", "2.0.0+windows"]),
        Some("2.0.0+linux")
    );
}

#[test]
fn test_highest_version_预发布标识忽略大小写() {
    // 与比较器一致: "rc" 排在 "alpha" 之后,不按字符编码 ('R' < 'a')
    assert_eq!(
        highest_version(["1.0.0-alpha", "1.0.0-RC"]),
        Some("1.0.0-RC")
    );
    let files = files(&["1.0.0-RC", "1.0.0-alpha", "1.0.0-beta"]);
    assert_eq!(
        all_versions(&files, None),
        vec!["1.0.0-RC", "1.0.0-beta", "1.0.0-alpha"]
    );
}

#[test]
fn test_highest_version_空输入() {
    assert_eq!(highest_version(std::iter::empty::<&str>()), None);
}

// ============================================================================
// latest_version 测试
// ============================================================================

#[test]
fn test_latest_version_取文件中最高版本() {
    let files = files(&["1.2.0", "1.10.0", "1.9.3"]);
    assert_eq!(latest_version(&files, Some("1.0.0")).as_deref(), Some("1.10.0"));
}

#[test]
fn test_latest_version_跳过无效和缺失版本() {
    let files = vec![file(None), file(Some("latest")), file(Some("0.1.0"))];
    assert_eq!(latest_version(&files, None).as_deref(), Some("0.1.0"));
}

#[test]
fn test_latest_version_回退到当前版本() {
    assert_eq!(latest_version(&[], Some("3.1.4")).as_deref(), Some("3.1.4"));
    assert_eq!(latest_version(&[], Some("  ")), None);
    assert_eq!(latest_version(&files(&["nope"]), None), None);
}

// ============================================================================
// all_versions 测试
// ============================================================================

#[test]
fn test_all_versions_从新到旧() {
    let files = files(&["1.0.0-beta", "2.0.0", "1.0.0", "1.0.0-alpha"]);
    assert_eq!(
        all_versions(&files, None),
        vec!["2.0.0", "1.0.0", "1.0.0-beta", "1.0.0-alpha"]
    );
}

#[test]
fn test_all_versions_仅构建元数据不同时去重() {
    let files = files(&["1.0.0+linux", "1.1.0", "1.0.0+windows"]);
    assert_eq!(all_versions(&files, None), vec!["1.1.0", "1.0.0+linux"]);
}

#[test]
fn test_all_versions_回退到当前版本() {
    assert_eq!(all_versions(&[], Some("0.0.1")), vec!["0.0.1"]);
    assert!(all_versions(&[], None).is_empty());
}
