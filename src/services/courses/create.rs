use tracing::info;

use super::CourseService;
use crate::errors::{CourseHubError, Result};
use crate::models::courses::entities::Course;
use crate::models::courses::requests::{CreateCourseRequest, NewCourse};
use crate::utils::{parse_problem_ids, validate_time_window, validate_title};

pub async fn create_course(
    service: &CourseService,
    domain_id: &str,
    course_data: CreateCourseRequest,
) -> Result<Course> {
    validate_title(&course_data.title).map_err(CourseHubError::validation)?;
    validate_time_window(course_data.begin_at, course_data.end_at)
        .map_err(CourseHubError::validation)?;
    let problem_ids = parse_problem_ids(&course_data.problems).map_err(CourseHubError::validation)?;

    let course = service
        .store()
        .create_course(NewCourse {
            domain_id: domain_id.to_string(),
            title: course_data.title,
            content: course_data.content,
            begin_at: course_data.begin_at,
            end_at: course_data.end_at,
            owner_id: course_data.owner_id,
            maintainer_ids: course_data.maintainer_ids,
            teacher_ids: course_data.teacher_ids,
            assigned_groups: course_data.assigned_groups,
            legacy_classes: Vec::new(),
            problem_ids,
        })
        .await?;

    info!(
        "Course {} created in domain {} by {}",
        course.id, domain_id, course.owner_id
    );

    Ok(course)
}
