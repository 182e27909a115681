use serde::{Deserialize, Serialize};

use crate::models::attachments::entities::Attachment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 所属域ID
    pub domain_id: String,
    // 课程标题
    pub title: String,
    // 课程描述（富文本，可内嵌相对文件引用）
    pub content: String,
    // 开始时间
    pub begin_at: chrono::DateTime<chrono::Utc>,
    // 结束时间
    pub end_at: chrono::DateTime<chrono::Utc>,
    // 创建者ID
    pub owner_id: i64,
    // 维护者ID集合
    pub maintainer_ids: Vec<i64>,
    // 教师ID集合
    pub teacher_ids: Vec<i64>,
    // 指定分组（空集合表示对所有具备基础查看权限的用户可见）
    pub assigned_groups: Vec<String>,
    // 旧版班级集合（仅用于分组过滤匹配）
    pub legacy_classes: Vec<String>,
    // 题目ID列表（有序）
    pub problem_ids: Vec<i64>,
    // 报名人数计数器（缓存聚合，最终一致）
    pub attend_count: i64,
    // 附件列表
    pub attachments: Vec<Attachment>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Course {
    /// 课程时间窗口是否已结束
    pub fn has_ended(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        now >= self.end_at
    }

    /// 当前附件总字节数（派生聚合，配额检查时重新计算）
    pub fn attachments_total_size(&self) -> i64 {
        self.attachments.iter().map(|a| a.size).sum()
    }

    /// 按名称查找附件
    pub fn find_attachment(&self, name: &str) -> Option<&Attachment> {
        self.attachments.iter().find(|a| a.name == name)
    }
}
