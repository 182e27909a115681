use tracing::info;

use super::CourseService;
use crate::errors::{CourseHubError, Result};
use crate::models::courses::entities::Course;
use crate::models::courses::requests::{CourseUpdate, UpdateCourseRequest};
use crate::utils::{parse_problem_ids, validate_time_window, validate_title};

pub async fn update_course(
    service: &CourseService,
    domain_id: &str,
    course_id: i64,
    update_data: UpdateCourseRequest,
) -> Result<Course> {
    let existing = service
        .store()
        .get_course(domain_id, course_id)
        .await?
        .ok_or_else(|| CourseHubError::not_found("course not found"))?;

    if let Some(ref title) = update_data.title {
        validate_title(title).map_err(CourseHubError::validation)?;
    }

    // 跨字段校验：只改一端时结合现有值检查时间窗口
    let begin_at = update_data.begin_at.unwrap_or(existing.begin_at);
    let end_at = update_data.end_at.unwrap_or(existing.end_at);
    validate_time_window(begin_at, end_at).map_err(CourseHubError::validation)?;

    let problem_ids = match update_data.problems {
        Some(ref raw) => Some(parse_problem_ids(raw).map_err(CourseHubError::validation)?),
        None => None,
    };

    let updated = service
        .store()
        .update_course(
            domain_id,
            course_id,
            CourseUpdate {
                title: update_data.title,
                content: update_data.content,
                begin_at: update_data.begin_at,
                end_at: update_data.end_at,
                maintainer_ids: update_data.maintainer_ids,
                teacher_ids: update_data.teacher_ids,
                assigned_groups: update_data.assigned_groups,
                problem_ids,
            },
        )
        .await?
        .ok_or_else(|| CourseHubError::not_found("course not found"))?;

    info!("Course {} updated in domain {}", course_id, domain_id);

    Ok(updated)
}
