pub mod enroll;
pub mod journal;
pub mod status;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::enrollments::entities::{Enrollment, JournalEntry};
use crate::models::enrollments::responses::EnrollmentStatusResponse;
use crate::storage::CourseStore;

pub struct EnrollmentService {
    store: Arc<dyn CourseStore>,
}

impl EnrollmentService {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &Arc<dyn CourseStore> {
        &self.store
    }

    // 报名课程（至多一次）
    pub async fn enroll(&self, domain_id: &str, course_id: i64, user_id: i64) -> Result<Enrollment> {
        enroll::enroll(self, domain_id, course_id, user_id).await
    }

    // 查询学生在课程中的状态与进度
    pub async fn get_status(
        &self,
        domain_id: &str,
        course_id: i64,
        user_id: i64,
    ) -> Result<EnrollmentStatusResponse> {
        status::get_status(self, domain_id, course_id, user_id).await
    }

    // 追加进度日志条目（由评测结果回调驱动）
    pub async fn append_journal(
        &self,
        domain_id: &str,
        course_id: i64,
        user_id: i64,
        entry: JournalEntry,
    ) -> Result<()> {
        journal::append_journal(self, domain_id, course_id, user_id, entry).await
    }
}
