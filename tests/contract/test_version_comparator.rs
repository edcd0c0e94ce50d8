//! 契约测试: 语义化版本比较器
//!
//! 覆盖版本号校验语法、比较的全序性质、版本说明与表单校验规则

use std::cmp::Ordering;

use proptest::prelude::*;
use tool_dashboard::models::{VersionError, VersionRuleError};
use tool_dashboard::utils::version::{
    compare_versions, compare_versions_strict, create_version_validation_rule,
    get_version_description, is_valid_semantic_version, INVALID_VERSION_DESCRIPTION,
};

// ============================================================================
// 语法校验
// ============================================================================

#[test]
fn test_合法版本号() {
    for v in [
        "0.0.0",
        "1.2.3",
        "10.20.30",
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-0.3.7",
        "1.0.0-x.7.z.92",
        "1.0.0-x-y-z.--",
        "1.0.0+20130313144700",
        "1.0.0-beta+exp.sha.5114f85",
        "1.0.0+21AF26D3----117B344092BD",
        "1.0.0+0001",
        "  1.2.3  ",
    ] {
        assert!(is_valid_semantic_version(Some(v)), "应当合法: {:?}", v);
    }
}

#[test]
fn test_非法版本号() {
    for v in [
        "",
        "   ",
        "1",
        "1.2",
        "1.2.3.4",
        "01.2.3",
        "1.02.3",
        "1.2.03",
        "1.2.3-",
        "1.2.3+",
        "1.2.3-01",
        "1.2.3-alpha..1",
        "v1.2.3",
        "1.2.3 beta",
        "1.2.3-αβ",
        "bad-version",
    ] {
        assert!(!is_valid_semantic_version(Some(v)), "应当非法: {:?}", v);
    }
    assert!(!is_valid_semantic_version(None));
}

// ============================================================================
// 优先级
// ============================================================================

#[test]
fn test_数字字段按数值比较() {
    assert_eq!(compare_versions("2.0.0", "1.9.9").unwrap(), Ordering::Greater);
    assert_eq!(compare_versions("1.10.0", "1.9.0").unwrap(), Ordering::Greater);
    assert_eq!(compare_versions("1.0.9", "1.0.10").unwrap(), Ordering::Less);
}

#[test]
fn test_正式版高于预发布版() {
    assert_eq!(
        compare_versions("1.0.0", "1.0.0-alpha").unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        compare_versions("1.0.0-rc.1", "1.0.0").unwrap(),
        Ordering::Less
    );
}

#[test]
fn test_预发布标识按字符串排序() {
    assert_eq!(
        compare_versions("1.0.0-alpha", "1.0.0-beta").unwrap(),
        Ordering::Less
    );
    // 简化排序: 不按数值比较点分段
    assert_eq!(
        compare_versions("1.0.0-alpha.10", "1.0.0-alpha.2").unwrap(),
        Ordering::Less
    );
    // 忽略大小写比较,相同时小写在前
    assert_eq!(
        compare_versions("1.0.0-Beta", "1.0.0-alpha").unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        compare_versions("1.0.0-alpha", "1.0.0-Alpha").unwrap(),
        Ordering::Less
    );
}

#[test]
fn test_严格模式按点分段比较() {
    assert_eq!(
        compare_versions_strict("1.0.0-alpha.10", "1.0.0-alpha.2").unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        compare_versions_strict("1.0.0", "1.0.0-rc.1").unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        compare_versions_strict("1.0.0+a", "1.0.0+b").unwrap(),
        Ordering::Equal
    );
}

#[test]
fn test_构建元数据不参与比较() {
    assert_eq!(
        compare_versions("1.0.0+001", "1.0.0+002").unwrap(),
        Ordering::Equal
    );
    assert_eq!(
        compare_versions("1.0.0-rc.1+build.5", "1.0.0-rc.1").unwrap(),
        Ordering::Equal
    );
}

#[test]
fn test_非法参数返回错误并标识参数() {
    let err = compare_versions("1.0.0", "bad-version").unwrap_err();
    assert_eq!(
        err,
        VersionError::InvalidVersion {
            argument: "version2".to_string(),
            value: "bad-version".to_string(),
        }
    );
    assert!(err.to_string().contains("bad-version"));

    let err = compare_versions("1.2", "1.0.0").unwrap_err();
    assert!(matches!(err, VersionError::InvalidVersion { ref argument, .. } if argument == "version1"));

    assert!(compare_versions_strict("x", "1.0.0").is_err());
}

#[test]
fn test_超出u64范围的数字字段按数值比较() {
    let huge = "18446744073709551616.0.0";
    assert!(is_valid_semantic_version(Some(huge)));
    assert_eq!(compare_versions(huge, "1.0.0").unwrap(), Ordering::Greater);
    assert_eq!(
        compare_versions("99999999999999999999.0.0", "100000000000000000000.0.0").unwrap(),
        Ordering::Less
    );
    assert_eq!(
        compare_versions("1.0.18446744073709551616-beta", "1.0.18446744073709551616-alpha").unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        get_version_description(huge),
        "主版本: 18446744073709551616, 次版本: 0, 修订号: 0"
    );
}

// ============================================================================
// 全序性质
// ============================================================================

fn pre_release() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "alpha", "Alpha", "alpha.1", "alpha.10", "alpha.2", "beta", "beta.11", "rc.1", "RC.1",
        "0", "0.3.7", "x-y-z", "1",
    ]))
    .prop_map(|p| p.map(str::to_string))
}

fn build() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[0-9A-Za-z-]{1,8}")
}

fn numeric_field() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (0u64..4).prop_map(|n| n.to_string()),
        1 => "[1-9][0-9]{19,24}",
    ]
}

prop_compose! {
    fn valid_version()(
        major in numeric_field(),
        minor in 0u64..4,
        patch in numeric_field(),
        pre in pre_release(),
        build in build(),
    ) -> String {
        let mut v = format!("{}.{}.{}", major, minor, patch);
        if let Some(pre) = pre {
            v.push('-');
            v.push_str(&pre);
        }
        if let Some(build) = build {
            v.push('+');
            v.push_str(&build);
        }
        v
    }
}

proptest! {
    #[test]
    fn prop_生成的版本号都合法(v in valid_version()) {
        prop_assert!(is_valid_semantic_version(Some(&v)));
    }

    #[test]
    fn prop_自反性(v in valid_version()) {
        prop_assert_eq!(compare_versions(&v, &v).unwrap(), Ordering::Equal);
    }

    #[test]
    fn prop_反对称性(a in valid_version(), b in valid_version()) {
        let ab = compare_versions(&a, &b).unwrap();
        let ba = compare_versions(&b, &a).unwrap();
        prop_assert_eq!(ab, ba.reverse());
    }

    #[test]
    fn prop_传递性(a in valid_version(), b in valid_version(), c in valid_version()) {
        let ab = compare_versions(&a, &b).unwrap();
        let bc = compare_versions(&b, &c).unwrap();
        if ab == Ordering::Greater && bc == Ordering::Greater {
            prop_assert_eq!(compare_versions(&a, &c).unwrap(), Ordering::Greater);
        }
    }

    #[test]
    fn prop_严格模式同样满足反对称性(a in valid_version(), b in valid_version()) {
        let ab = compare_versions_strict(&a, &b).unwrap();
        let ba = compare_versions_strict(&b, &a).unwrap();
        prop_assert_eq!(ab, ba.reverse());
    }

    #[test]
    fn prop_任意字符串校验不会panic(s in "\\PC*") {
        let _ = is_valid_semantic_version(Some(&s));
    }
}

// ============================================================================
// 版本说明
// ============================================================================

#[test]
fn test_版本说明包含各字段() {
    let desc = get_version_description("1.2.3-rc.1");
    assert!(desc.contains("主版本: 1"));
    assert!(desc.contains("次版本: 2"));
    assert!(desc.contains("修订号: 3"));
    assert!(desc.contains("预发布: rc.1"));

    assert_eq!(get_version_description("4.5.6+build"), "主版本: 4, 次版本: 5, 修订号: 6");
}

#[test]
fn test_非法版本说明为固定消息() {
    assert_eq!(get_version_description("nope"), INVALID_VERSION_DESCRIPTION);
    assert_eq!(get_version_description(""), INVALID_VERSION_DESCRIPTION);
}

// ============================================================================
// 表单校验规则
// ============================================================================

#[test]
fn test_非必填规则() {
    let rule = create_version_validation_rule(false);
    assert!(!rule.required);
    assert_eq!(rule.validate(None), Ok(()));
    assert_eq!(rule.validate(Some("")), Ok(()));
    assert_eq!(rule.validate(Some("   ")), Ok(()));
    assert_eq!(rule.validate(Some("1.2")), Err(VersionRuleError::InvalidFormat));
    assert_eq!(rule.validate(Some("1.2.0")), Ok(()));
}

#[test]
fn test_必填规则() {
    let rule = create_version_validation_rule(true);
    assert!(rule.required);
    assert_eq!(rule.trigger, "blur");
    assert_eq!(rule.validate(None), Err(VersionRuleError::Required));
    assert_eq!(rule.validate(Some("")), Err(VersionRuleError::Required));
    assert_eq!(rule.validate(Some("abc")), Err(VersionRuleError::InvalidFormat));

    let validator = rule.validator();
    assert_eq!(validator(Some("2.0.0-beta.1")), Ok(()));
}
