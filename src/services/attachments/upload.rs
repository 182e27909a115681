use tracing::info;

use super::{AttachmentService, blob_path};
use crate::errors::{CourseHubError, Result};
use crate::models::attachments::entities::Attachment;
use crate::utils::validate_attachment_name;

/// 上传附件
///
/// 两项配额检查都在任何存储写入之前完成；blob 写入失败时
/// 不会留下元数据条目。并发上传可能各自通过过期的配额检查，
/// 短暂超出上限——软限制语义。
pub async fn upload_attachment(
    service: &AttachmentService,
    domain_id: &str,
    course_id: i64,
    name: &str,
    data: Vec<u8>,
    operator_id: i64,
) -> Result<Attachment> {
    validate_attachment_name(name).map_err(CourseHubError::validation)?;

    let course = service
        .store()
        .get_course(domain_id, course_id)
        .await?
        .ok_or_else(|| CourseHubError::not_found("course not found"))?;

    let quota = service.quota();
    if course.attachments.len() >= quota.max_count {
        return Err(CourseHubError::quota_count_exceeded(format!(
            "course already has {} attachment(s), limit is {}",
            course.attachments.len(),
            quota.max_count
        )));
    }
    let incoming_size = data.len() as i64;
    if course.attachments_total_size() + incoming_size >= quota.max_total_size {
        return Err(CourseHubError::quota_size_exceeded(format!(
            "attachment total size would reach {} byte(s), limit is {}",
            course.attachments_total_size() + incoming_size,
            quota.max_total_size
        )));
    }

    let path = blob_path(domain_id, course_id, name);
    service.blob().put(&path, data, operator_id).await?;

    let meta = service
        .blob()
        .get_meta(&path)
        .await?
        .ok_or_else(|| CourseHubError::upload_failure("file upload failed"))?;

    let attachment = Attachment {
        name: name.to_string(),
        size: meta.size,
        last_modified: meta.last_modified,
        fingerprint: meta.fingerprint,
    };
    service
        .store()
        .push_attachment(domain_id, course_id, attachment.clone())
        .await?;

    info!(
        "Attachment '{}' ({} bytes) uploaded to course {} by {}",
        name, attachment.size, course_id, operator_id
    );

    Ok(attachment)
}
