use serde::{Deserialize, Serialize};

use crate::models::VersionRuleError;
use crate::utils::version::create_version_validation_rule;

/// 工具
///
/// 看板中展示的一个可下载工具。除名称外,其余字段均由后端按需填充。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 工具类型,用于分组展示和文件存储目录
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tool_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_url: Option<String>,

    /// 当前版本号 (无文件版本时作为最新版本的回退值)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl Tool {
    /// 创建只有名称的工具
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// 设置工具类型 (构建器模式)
    pub fn with_type(mut self, tool_type: impl Into<String>) -> Self {
        self.tool_type = Some(tool_type.into());
        self
    }

    /// 设置当前版本号 (构建器模式)
    pub fn with_current_version(mut self, version: impl Into<String>) -> Self {
        self.current_version = Some(version.into());
        self
    }

    /// 校验当前版本号
    ///
    /// 当前版本号允许为空,填写时必须符合语义化版本规范
    pub fn validate_version(&self) -> Result<(), VersionRuleError> {
        create_version_validation_rule(false).validate(self.current_version.as_deref())
    }
}

/// 工具分组
///
/// 按工具类型聚合的列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolGroup {
    #[serde(rename = "type")]
    pub group_type: String,
    pub type_name: String,
    pub tools: Vec<Tool>,
    pub count: u64,
}
