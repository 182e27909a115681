use serde::{Deserialize, Serialize};

/// 查看者身份
///
/// 可见性过滤的输入，由宿主平台的鉴权层解析得到。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewer {
    pub user_id: i64,
    // 查看者所属分组
    pub groups: Vec<String>,
    // 是否持有"查看隐藏课程"权限
    pub can_view_hidden: bool,
}

impl Viewer {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            groups: Vec::new(),
            can_view_hidden: false,
        }
    }

    pub fn with_groups(mut self, groups: &[&str]) -> Self {
        self.groups = groups.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_hidden_permission(mut self) -> Self {
        self.can_view_hidden = true;
        self
    }
}

/// 用户展示摘要（由身份服务解析）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
}

impl UserSummary {
    /// 身份服务未返回时的占位摘要
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            username: format!("user#{id}"),
            display_name: None,
        }
    }
}
