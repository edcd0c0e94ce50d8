use serde::{Deserialize, Serialize};

/// 变更日志
///
/// 记录某个工具在某个版本上的一次变更
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub tool_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// 变更类型 (如 新增、修复、优化)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// 变更人
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}
