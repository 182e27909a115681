use serde::{Deserialize, Serialize};

use crate::models::problems::entities::ProblemSummary;
use crate::models::users::entities::UserSummary;

/// 排行榜单元格：某学生在某题目上的生效得分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardCell {
    pub problem_id: i64,
    // 无生效提交时为 0
    pub score: i32,
}

/// 排行榜行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardRow {
    pub user: UserSummary,
    pub total_score: i64,
    // 与课程题目列表同序
    pub cells: Vec<ScoreboardCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardResponse {
    // 表头列，与行内单元格同序
    pub problems: Vec<ProblemSummary>,
    pub rows: Vec<ScoreboardRow>,
}
