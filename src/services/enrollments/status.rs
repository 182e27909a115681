use super::EnrollmentService;
use crate::errors::{CourseHubError, Result};
use crate::models::courses::entities::Course;
use crate::models::enrollments::entities::Enrollment;
use crate::models::enrollments::responses::{EnrollmentStatusResponse, ProblemProgress};

pub async fn get_status(
    service: &EnrollmentService,
    domain_id: &str,
    course_id: i64,
    user_id: i64,
) -> Result<EnrollmentStatusResponse> {
    let course = service
        .store()
        .get_course(domain_id, course_id)
        .await?
        .ok_or_else(|| CourseHubError::not_found("course not found"))?;

    let enrollment = service
        .store()
        .get_enrollment(domain_id, course_id, user_id)
        .await?;

    Ok(match enrollment {
        Some(enrollment) => EnrollmentStatusResponse {
            enrolled: enrollment.attend,
            enroll_at: enrollment.enroll_at,
            progress: current_progress(&course, &enrollment),
        },
        None => EnrollmentStatusResponse {
            enrolled: false,
            enroll_at: None,
            progress: Vec::new(),
        },
    })
}

/// 当前进度
///
/// 对课程题目列表中的每个题目取生效日志条目（按追加顺序最后一条），
/// 无提交的题目不出现在结果中。
pub(crate) fn current_progress(course: &Course, enrollment: &Enrollment) -> Vec<ProblemProgress> {
    course
        .problem_ids
        .iter()
        .filter_map(|&problem_id| {
            enrollment
                .effective_entry(problem_id)
                .map(|entry| ProblemProgress {
                    problem_id,
                    record_id: entry.record_id,
                    score: entry.score,
                    status: entry.status,
                })
        })
        .collect()
}
