use serde::{Deserialize, Serialize};

/// 题目摘要（由题库服务解析）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemSummary {
    pub id: i64,
    pub title: String,
    pub hidden: bool,
}
