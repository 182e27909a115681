//! 内存参考存储实现
//!
//! 进程内的文档/Blob 存储参考实现，供开发与测试使用；
//! 生产环境的文档存储由宿主平台提供。
//! 报名条件写入依赖 DashMap entry API 的分片锁保证原子性。

mod courses;
mod enrollments;
mod support;

pub use support::{MemoryBlobStore, MemoryProblemCatalog, MemoryRecordStore, MemoryUserDirectory};

use std::sync::atomic::AtomicI64;

use dashmap::DashMap;

use crate::models::attachments::entities::Attachment;
use crate::models::courses::{
    entities::Course,
    filter::CourseFilter,
    requests::{CourseUpdate, NewCourse},
    responses::CourseListResponse,
};
use crate::models::enrollments::entities::{Enrollment, JournalEntry};

use crate::errors::Result;
use crate::storage::CourseStore;

/// 内存课程存储
pub struct MemoryStorage {
    pub(crate) courses: DashMap<(String, i64), Course>,
    pub(crate) enrollments: DashMap<(String, i64, i64), Enrollment>,
    pub(crate) next_course_id: AtomicI64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            courses: DashMap::new(),
            enrollments: DashMap::new(),
            next_course_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

// CourseStore trait 实现
#[async_trait::async_trait]
impl CourseStore for MemoryStorage {
    // 课程模块
    async fn create_course(&self, course: NewCourse) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course(&self, domain_id: &str, course_id: i64) -> Result<Option<Course>> {
        self.get_course_impl(domain_id, course_id).await
    }

    async fn list_courses(
        &self,
        domain_id: &str,
        filter: &CourseFilter,
        page: u64,
        size: u64,
    ) -> Result<CourseListResponse> {
        self.list_courses_impl(domain_id, filter, page, size).await
    }

    async fn update_course(
        &self,
        domain_id: &str,
        course_id: i64,
        update: CourseUpdate,
    ) -> Result<Option<Course>> {
        self.update_course_impl(domain_id, course_id, update).await
    }

    async fn delete_course(&self, domain_id: &str, course_id: i64) -> Result<bool> {
        self.delete_course_impl(domain_id, course_id).await
    }

    async fn inc_attend_count(&self, domain_id: &str, course_id: i64, delta: i64) -> Result<()> {
        self.inc_attend_count_impl(domain_id, course_id, delta).await
    }

    async fn push_attachment(
        &self,
        domain_id: &str,
        course_id: i64,
        attachment: Attachment,
    ) -> Result<bool> {
        self.push_attachment_impl(domain_id, course_id, attachment)
            .await
    }

    async fn pull_attachments(
        &self,
        domain_id: &str,
        course_id: i64,
        names: &[String],
    ) -> Result<bool> {
        self.pull_attachments_impl(domain_id, course_id, names).await
    }

    // 报名模块
    async fn get_enrollment(
        &self,
        domain_id: &str,
        course_id: i64,
        user_id: i64,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(domain_id, course_id, user_id).await
    }

    async fn list_enrollments(&self, domain_id: &str, course_id: i64) -> Result<Vec<Enrollment>> {
        self.list_enrollments_impl(domain_id, course_id).await
    }

    async fn set_attend_if_absent(
        &self,
        domain_id: &str,
        course_id: i64,
        user_id: i64,
        enroll_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<bool> {
        self.set_attend_if_absent_impl(domain_id, course_id, user_id, enroll_at)
            .await
    }

    async fn append_journal(
        &self,
        domain_id: &str,
        course_id: i64,
        user_id: i64,
        entry: JournalEntry,
    ) -> Result<()> {
        self.append_journal_impl(domain_id, course_id, user_id, entry)
            .await
    }

    async fn delete_course_enrollments(&self, domain_id: &str, course_id: i64) -> Result<u64> {
        self.delete_course_enrollments_impl(domain_id, course_id)
            .await
    }
}
