use std::sync::Arc;

use serde::de::IgnoredAny;

use crate::models::{ApiError, ChangeLog, PageQuery, PageResponse};
use crate::services::api_client::require_data;
use crate::services::ApiClient;
use crate::utils::version::create_version_validation_rule;

/// 变更日志接口
pub struct ChangeLogApi {
    client: Arc<ApiClient>,
}

impl ChangeLogApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 根据工具ID查询变更日志
    pub async fn by_tool(&self, tool_id: i64) -> Result<Vec<ChangeLog>, ApiError> {
        Ok(self
            .client
            .get(&format!("/changelogs/tool/{}", tool_id))
            .await?
            .unwrap_or_default())
    }

    /// 分页查询变更日志
    pub async fn page(&self, query: &PageQuery) -> Result<PageResponse<ChangeLog>, ApiError> {
        let path = "/changelogs/page";
        require_data(self.client.get_with_query(path, query).await?, path)
    }

    /// 新增变更日志
    pub async fn add(&self, log: &ChangeLog) -> Result<(), ApiError> {
        Self::validate(log)?;
        self.client.post::<IgnoredAny, _>("/changelogs", log).await?;
        Ok(())
    }

    /// 更新变更日志
    pub async fn update(&self, id: i64, log: &ChangeLog) -> Result<(), ApiError> {
        Self::validate(log)?;
        self.client
            .put::<IgnoredAny, _>(&format!("/changelogs/{}", id), log)
            .await?;
        Ok(())
    }

    /// 删除变更日志
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete::<IgnoredAny>(&format!("/changelogs/{}", id))
            .await?;
        Ok(())
    }

    // 版本号可选,填写时须合规
    fn validate(log: &ChangeLog) -> Result<(), ApiError> {
        create_version_validation_rule(false).validate(log.version.as_deref())?;
        Ok(())
    }
}
