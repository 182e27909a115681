use super::RecordService;
use crate::errors::Result;
use crate::models::records::{entities::RecordSummary, requests::RecordListQuery};
use crate::models::users::entities::Viewer;
use crate::services::courses::get::find_visible_course;

pub async fn list_course_records(
    service: &RecordService,
    domain_id: &str,
    course_id: i64,
    viewer: &Viewer,
    query: RecordListQuery,
) -> Result<Vec<RecordSummary>> {
    let course = find_visible_course(service.store(), domain_id, course_id, viewer).await?;

    if course.problem_ids.is_empty() {
        return Ok(Vec::new());
    }

    service
        .records()
        .list_records_by_problems(domain_id, &course.problem_ids, query.user_id)
        .await
}
