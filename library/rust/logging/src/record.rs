use b4se_web::RequestInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::operation::OperationType;

/// OperationLog は監査対象操作の記録。
///
/// 操作種別・件名・リクエスト出所メタデータ・任意の JSON メタデータを
/// 1 レコードにまとめる。永続化や送信は呼び出し側の責務。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationLog {
    pub id: Uuid,
    pub operation: OperationType,
    pub title: String,
    pub description: String,
    pub request: RequestInfo,
    pub metadata: serde_json::Value,
    pub recorded_at: DateTime<Utc>,
}

impl OperationLog {
    pub fn new(
        operation: OperationType,
        title: impl Into<String>,
        description: impl Into<String>,
        request: RequestInfo,
        metadata: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            operation,
            title: title.into(),
            description: description.into(),
            request,
            metadata,
            recorded_at: Utc::now(),
        }
    }

    /// レコードを構造化ログとして出力する。
    pub fn emit(&self) {
        tracing::info!(
            target: "b4se_logging::operation",
            id = %self.id,
            operation = %self.operation,
            title = %self.title,
            request_ip = %self.request.request_ip,
            request_target = %self.request.request_target,
            "operation recorded"
        );
    }
}
