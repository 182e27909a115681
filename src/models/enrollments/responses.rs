use serde::{Deserialize, Serialize};

/// 单题进度（来自生效日志条目）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemProgress {
    pub problem_id: i64,
    pub record_id: i64,
    pub score: i32,
    pub status: i32,
}

/// 学生在课程中的状态查询结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentStatusResponse {
    pub enrolled: bool,
    pub enroll_at: Option<chrono::DateTime<chrono::Utc>>,
    // 按课程题目列表顺序排列，无提交的题目不出现
    pub progress: Vec<ProblemProgress>,
}
