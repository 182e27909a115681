use std::sync::Arc;

use super::CourseService;
use super::visibility::build_course_filter;
use crate::errors::{CourseHubError, Result};
use crate::models::courses::entities::Course;
use crate::models::courses::requests::CourseListQuery;
use crate::models::users::entities::Viewer;
use crate::storage::CourseStore;

// "不存在"与"无可见性授权"对调用方刻意不可区分，避免暴露课程存在性
const COURSE_NOT_FOUND: &str = "course not found";

pub async fn get_course(
    service: &CourseService,
    domain_id: &str,
    course_id: i64,
    viewer: &Viewer,
) -> Result<Course> {
    find_visible_course(service.store(), domain_id, course_id, viewer).await
}

/// 以查看者视角解析课程
///
/// 供课程查询、排行榜与记录列表共用。
pub(crate) async fn find_visible_course(
    store: &Arc<dyn CourseStore>,
    domain_id: &str,
    course_id: i64,
    viewer: &Viewer,
) -> Result<Course> {
    let course = store
        .get_course(domain_id, course_id)
        .await?
        .ok_or_else(|| CourseHubError::not_found(COURSE_NOT_FOUND))?;

    let filter = build_course_filter(viewer, &CourseListQuery::default());
    if !filter.matches(&course) {
        return Err(CourseHubError::not_found(COURSE_NOT_FOUND));
    }

    Ok(course)
}
