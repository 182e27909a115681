use serde::{Deserialize, Serialize};

/// 提交记录摘要（由评测记录服务解析）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: i64,
    pub domain_id: String,
    pub user_id: i64,
    pub problem_id: i64,
    pub score: i32,
    pub status: i32,
    pub judged_at: chrono::DateTime<chrono::Utc>,
}
