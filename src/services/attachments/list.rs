use super::{AttachmentService, blob_path};
use crate::errors::{CourseHubError, Result};
use crate::models::attachments::entities::Attachment;

pub async fn list_attachments(
    service: &AttachmentService,
    domain_id: &str,
    course_id: i64,
) -> Result<Vec<Attachment>> {
    let course = service
        .store()
        .get_course(domain_id, course_id)
        .await?
        .ok_or_else(|| CourseHubError::not_found("course not found"))?;

    Ok(course.attachments)
}

pub async fn download_link(
    service: &AttachmentService,
    domain_id: &str,
    course_id: i64,
    name: &str,
    inline: bool,
) -> Result<String> {
    let course = service
        .store()
        .get_course(domain_id, course_id)
        .await?
        .ok_or_else(|| CourseHubError::not_found("course not found"))?;

    let attachment = course
        .find_attachment(name)
        .ok_or_else(|| CourseHubError::not_found("attachment not found"))?;

    service
        .blob()
        .sign_download_link(
            &blob_path(domain_id, course_id, &attachment.name),
            Some(&attachment.name),
            inline,
        )
        .await
}
