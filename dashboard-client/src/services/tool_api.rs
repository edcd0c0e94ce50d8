use std::sync::Arc;

use serde::de::IgnoredAny;
use serde::Serialize;

use crate::models::{ApiError, PageQuery, PageResponse, Tool, ToolGroup};
use crate::services::api_client::require_data;
use crate::services::ApiClient;

/// 工具接口
pub struct ToolApi {
    client: Arc<ApiClient>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolNameQuery<'a> {
    tool_name: &'a str,
}

impl ToolApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 分页查询工具列表
    ///
    /// `GET /tools/page?pageNum&pageSize&keyword`
    pub async fn page(&self, query: &PageQuery) -> Result<PageResponse<Tool>, ApiError> {
        let path = "/tools/page";
        require_data(self.client.get_with_query(path, query).await?, path)
    }

    /// 获取所有工具
    pub async fn list(&self) -> Result<Vec<Tool>, ApiError> {
        Ok(self.client.get("/tools/list").await?.unwrap_or_default())
    }

    /// 按类型分组查询工具
    pub async fn groups(&self) -> Result<Vec<ToolGroup>, ApiError> {
        Ok(self.client.get("/tools/groups").await?.unwrap_or_default())
    }

    /// 获取工具详情
    pub async fn detail(&self, id: i64) -> Result<Tool, ApiError> {
        let path = format!("/tools/{}", id);
        require_data(self.client.get(&path).await?, &path)
    }

    /// 新增工具
    ///
    /// 当前版本号填写时必须符合语义化版本规范,否则请求不会发出
    pub async fn add(&self, tool: &Tool) -> Result<(), ApiError> {
        tool.validate_version()?;
        self.client.post::<IgnoredAny, _>("/tools", tool).await?;
        tracing::info!(tool_name = %tool.name, "工具已新增");
        Ok(())
    }

    /// 更新工具
    pub async fn update(&self, id: i64, tool: &Tool) -> Result<(), ApiError> {
        tool.validate_version()?;
        self.client
            .put::<IgnoredAny, _>(&format!("/tools/{}", id), tool)
            .await?;
        tracing::info!(tool_id = id, "工具已更新");
        Ok(())
    }

    /// 删除工具
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete::<IgnoredAny>(&format!("/tools/{}", id))
            .await?;
        tracing::info!(tool_id = id, "工具已删除");
        Ok(())
    }

    /// 获取指定工具的最新版本号
    ///
    /// 工具不存在或没有任何版本时返回 `None`
    pub async fn latest_version(&self, tool_name: &str) -> Result<Option<String>, ApiError> {
        self.client
            .get_with_query("/tools/latest-version", &ToolNameQuery { tool_name })
            .await
    }
}
