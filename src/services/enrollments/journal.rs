use tracing::debug;

use super::EnrollmentService;
use crate::errors::Result;
use crate::models::enrollments::entities::JournalEntry;

/// 追加进度日志条目
///
/// 由评测结果回调驱动；条目从不原位修改，重交通过追加新条目覆盖。
pub async fn append_journal(
    service: &EnrollmentService,
    domain_id: &str,
    course_id: i64,
    user_id: i64,
    entry: JournalEntry,
) -> Result<()> {
    debug!(
        "Journal append: course {} user {} problem {} record {} score {}",
        course_id, user_id, entry.problem_id, entry.record_id, entry.score
    );

    service
        .store()
        .append_journal(domain_id, course_id, user_id, entry)
        .await
}
