use tracing::{info, warn};

use super::CourseService;
use crate::errors::{CourseHubError, Result};
use crate::services::attachments::blob_path;

pub async fn delete_course(service: &CourseService, domain_id: &str, course_id: i64) -> Result<()> {
    let course = service
        .store()
        .get_course(domain_id, course_id)
        .await?
        .ok_or_else(|| CourseHubError::not_found("course not found"))?;

    let removed_enrollments = service
        .store()
        .delete_course_enrollments(domain_id, course_id)
        .await?;
    service.store().delete_course(domain_id, course_id).await?;

    // 附件 blob 最后清理，失败只留下孤儿对象，不影响文档级联
    if !course.attachments.is_empty() {
        let paths: Vec<String> = course
            .attachments
            .iter()
            .map(|a| blob_path(domain_id, course_id, &a.name))
            .collect();
        if let Err(e) = service.blob().del(&paths, course.owner_id).await {
            warn!(
                "Failed to delete {} attachment blob(s) for course {}: {}",
                paths.len(),
                course_id,
                e
            );
        }
    }

    info!(
        "Course {} deleted in domain {} ({} enrollment(s) cascaded)",
        course_id, domain_id, removed_enrollments
    );

    Ok(())
}
