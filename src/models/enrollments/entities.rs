use serde::{Deserialize, Serialize};

/// 进度日志条目
///
/// 由评测结果回调追加，从不原位修改或单独删除。
/// `score` 与 `status` 是评测平台的原样透传值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub problem_id: i64,
    pub record_id: i64,
    pub score: i32,
    pub status: i32,
}

/// 学生在课程中的报名状态与进度日志
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub domain_id: String,
    pub course_id: i64,
    pub user_id: i64,
    // 是否已报名
    pub attend: bool,
    // 报名时间（未报名时为 None）
    pub enroll_at: Option<chrono::DateTime<chrono::Utc>>,
    // 进度日志（仅追加，按追加顺序排列）
    pub journal: Vec<JournalEntry>,
}

impl Enrollment {
    pub fn new(domain_id: &str, course_id: i64, user_id: i64) -> Self {
        Self {
            domain_id: domain_id.to_string(),
            course_id,
            user_id,
            attend: false,
            enroll_at: None,
            journal: Vec::new(),
        }
    }

    /// 某题目的生效日志条目
    ///
    /// 取按追加顺序最后一条匹配该题目的记录（重交覆盖旧结果，
    /// 与分数高低无关）。
    pub fn effective_entry(&self, problem_id: i64) -> Option<&JournalEntry> {
        self.journal.iter().rev().find(|e| e.problem_id == problem_id)
    }
}
