//! 宿主平台存储接口
//!
//! 文档存储、Blob 存储、身份/分组服务、题库与评测记录
//! 都由宿主平台提供，本模块只定义消费它们的窄接口。
//! `memory` 子模块是进程内参考实现，用于开发与测试。

use std::sync::Arc;

use crate::models::attachments::entities::{Attachment, BlobMeta};
use crate::models::courses::{
    entities::Course,
    filter::CourseFilter,
    requests::{CourseUpdate, NewCourse},
    responses::CourseListResponse,
};
use crate::models::enrollments::entities::{Enrollment, JournalEntry};
use crate::models::problems::entities::ProblemSummary;
use crate::models::records::entities::RecordSummary;
use crate::models::users::entities::UserSummary;

use crate::errors::Result;

pub mod memory;

/// 课程文档与 (课程, 用户) 状态子集合
#[async_trait::async_trait]
pub trait CourseStore: Send + Sync {
    /// 课程文档方法
    // 创建课程，ID 由存储层分配
    async fn create_course(&self, course: NewCourse) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course(&self, domain_id: &str, course_id: i64) -> Result<Option<Course>>;
    // 按过滤谓词分页列出课程，开始时间降序、ID 降序
    async fn list_courses(
        &self,
        domain_id: &str,
        filter: &CourseFilter,
        page: u64,
        size: u64,
    ) -> Result<CourseListResponse>;
    // 更新课程字段
    async fn update_course(
        &self,
        domain_id: &str,
        course_id: i64,
        update: CourseUpdate,
    ) -> Result<Option<Course>>;
    // 删除课程文档
    async fn delete_course(&self, domain_id: &str, course_id: i64) -> Result<bool>;
    // 报名计数器增减（缓存聚合，课程不存在时为空操作）
    async fn inc_attend_count(&self, domain_id: &str, course_id: i64, delta: i64) -> Result<()>;
    // 追加附件元数据，同名条目被替换
    async fn push_attachment(
        &self,
        domain_id: &str,
        course_id: i64,
        attachment: Attachment,
    ) -> Result<bool>;
    // 按名称移除附件元数据
    async fn pull_attachments(
        &self,
        domain_id: &str,
        course_id: i64,
        names: &[String],
    ) -> Result<bool>;

    /// (课程, 用户) 状态子集合方法
    // 获取单个学生的报名状态
    async fn get_enrollment(
        &self,
        domain_id: &str,
        course_id: i64,
        user_id: i64,
    ) -> Result<Option<Enrollment>>;
    // 列出已报名学生，按报名时间升序、用户ID升序
    async fn list_enrollments(&self, domain_id: &str, course_id: i64) -> Result<Vec<Enrollment>>;
    // 条件置位报名标志：仅当该 (课程, 用户) 尚未报名时成功。
    // 报名唯一性的单一事实来源，必须对并发重复调用保持原子。
    async fn set_attend_if_absent(
        &self,
        domain_id: &str,
        course_id: i64,
        user_id: i64,
        enroll_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<bool>;
    // 追加进度日志条目（记录不存在时隐式创建未报名记录）
    async fn append_journal(
        &self,
        domain_id: &str,
        course_id: i64,
        user_id: i64,
        entry: JournalEntry,
    ) -> Result<()>;
    // 级联删除课程的全部报名记录
    async fn delete_course_enrollments(&self, domain_id: &str, course_id: i64) -> Result<u64>;
}

/// Blob 存储
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    // 写入对象
    async fn put(&self, path: &str, data: Vec<u8>, operator_id: i64) -> Result<()>;
    // 获取对象元数据，不存在时返回 None
    async fn get_meta(&self, path: &str) -> Result<Option<BlobMeta>>;
    // 批量删除对象
    async fn del(&self, paths: &[String], operator_id: i64) -> Result<()>;
    // 生成下载链接
    async fn sign_download_link(
        &self,
        path: &str,
        display_name: Option<&str>,
        inline: bool,
    ) -> Result<String>;
}

/// 身份与分组服务
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    // 用户在域内所属的分组
    async fn get_user_groups(&self, domain_id: &str, user_id: i64) -> Result<Vec<String>>;
    // 域内全部分组
    async fn list_domain_groups(&self, domain_id: &str) -> Result<Vec<String>>;
    // 解析用户展示摘要，未知用户被跳过
    async fn get_user_summaries(&self, user_ids: &[i64]) -> Result<Vec<UserSummary>>;
}

/// 题库服务
#[async_trait::async_trait]
pub trait ProblemCatalog: Send + Sync {
    // 按输入顺序解析题目摘要；include_hidden 为 false 时过滤隐藏题目
    async fn get_problem_summaries(
        &self,
        domain_id: &str,
        problem_ids: &[i64],
        include_hidden: bool,
    ) -> Result<Vec<ProblemSummary>>;
}

/// 评测记录服务
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    // 解析提交记录摘要
    async fn get_record_summaries(&self, record_ids: &[i64]) -> Result<Vec<RecordSummary>>;
    // 按题目集合列出提交记录，可限定单个用户
    async fn list_records_by_problems(
        &self,
        domain_id: &str,
        problem_ids: &[i64],
        user_id: Option<i64>,
    ) -> Result<Vec<RecordSummary>>;
}

/// 创建内存参考存储（开发与测试用）
pub fn create_memory_storage() -> Arc<memory::MemoryStorage> {
    Arc::new(memory::MemoryStorage::new())
}
