use serde::{Deserialize, Serialize};

/// 课程提交记录列表查询参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordListQuery {
    // 限定到单个用户
    pub user_id: Option<i64>,
}
