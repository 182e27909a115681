use serde::{Deserialize, Serialize};

/// 课程附件元数据
///
/// 附件名在单个课程内唯一，总大小与数量为派生聚合，
/// 在配额检查时由当前附件列表重新计算，不单独存储。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    // 附件名（课程内唯一）
    pub name: String,
    // 声明的字节大小
    pub size: i64,
    // 最后修改时间
    pub last_modified: chrono::DateTime<chrono::Utc>,
    // 内容指纹
    pub fingerprint: String,
}

/// Blob 存储返回的对象元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobMeta {
    pub size: i64,
    pub last_modified: chrono::DateTime<chrono::Utc>,
    pub fingerprint: String,
}
