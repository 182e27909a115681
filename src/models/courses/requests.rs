use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub content: String,
    pub begin_at: chrono::DateTime<chrono::Utc>,
    pub end_at: chrono::DateTime<chrono::Utc>,
    pub owner_id: i64,
    #[serde(default)]
    pub maintainer_ids: Vec<i64>,
    #[serde(default)]
    pub teacher_ids: Vec<i64>,
    #[serde(default)]
    pub assigned_groups: Vec<String>,
    // 题目ID列表，逗号/空白分隔的文本，由服务层解析校验
    #[serde(default)]
    pub problems: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub begin_at: Option<chrono::DateTime<chrono::Utc>>,
    pub end_at: Option<chrono::DateTime<chrono::Utc>>,
    pub maintainer_ids: Option<Vec<i64>>,
    pub teacher_ids: Option<Vec<i64>>,
    pub assigned_groups: Option<Vec<String>>,
    pub problems: Option<String>,
}

/// 课程列表查询参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseListQuery {
    // 标题搜索串
    pub search: Option<String>,
    // 显式分组过滤
    pub group: Option<String>,
    pub page: Option<u64>,
    pub size: Option<u64>,
}

/// 存储层字段更新（服务层校验解析后的形态）
#[derive(Debug, Clone, Default)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub begin_at: Option<chrono::DateTime<chrono::Utc>>,
    pub end_at: Option<chrono::DateTime<chrono::Utc>>,
    pub maintainer_ids: Option<Vec<i64>>,
    pub teacher_ids: Option<Vec<i64>>,
    pub assigned_groups: Option<Vec<String>>,
    pub problem_ids: Option<Vec<i64>>,
}

/// 新课程（服务层校验解析后的形态，ID 由存储层分配）
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub domain_id: String,
    pub title: String,
    pub content: String,
    pub begin_at: chrono::DateTime<chrono::Utc>,
    pub end_at: chrono::DateTime<chrono::Utc>,
    pub owner_id: i64,
    pub maintainer_ids: Vec<i64>,
    pub teacher_ids: Vec<i64>,
    pub assigned_groups: Vec<String>,
    pub legacy_classes: Vec<String>,
    pub problem_ids: Vec<i64>,
}
