use tracing::{info, warn};

use super::{AttachmentService, blob_path};
use crate::errors::{CourseHubError, Result};

/// 删除附件
///
/// 元数据移除与 blob 删除并发发出，各自尽力而为：
/// blob 删除失败只留下孤儿对象并记录日志，元数据失败则上报。
pub async fn delete_attachments(
    service: &AttachmentService,
    domain_id: &str,
    course_id: i64,
    names: &[String],
    operator_id: i64,
) -> Result<()> {
    service
        .store()
        .get_course(domain_id, course_id)
        .await?
        .ok_or_else(|| CourseHubError::not_found("course not found"))?;

    let paths: Vec<String> = names
        .iter()
        .map(|name| blob_path(domain_id, course_id, name))
        .collect();

    let (meta_result, blob_result) = futures_util::future::join(
        service.store().pull_attachments(domain_id, course_id, names),
        service.blob().del(&paths, operator_id),
    )
    .await;

    if let Err(e) = blob_result {
        warn!(
            "Failed to delete {} attachment blob(s) for course {}: {}",
            paths.len(),
            course_id,
            e
        );
    }
    meta_result?;

    info!(
        "{} attachment(s) deleted from course {} by {}",
        names.len(),
        course_id,
        operator_id
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::AttachmentConfig;
    use crate::models::courses::requests::NewCourse;
    use crate::storage::memory::MemoryBlobStore;
    use crate::storage::{BlobStore, CourseStore, create_memory_storage};

    async fn seed_course(store: &Arc<crate::storage::memory::MemoryStorage>) -> i64 {
        let begin = chrono::Utc::now();
        store
            .create_course(NewCourse {
                domain_id: "system".to_string(),
                title: "课程".to_string(),
                content: String::new(),
                begin_at: begin,
                end_at: begin + chrono::Duration::days(30),
                owner_id: 1,
                maintainer_ids: vec![],
                teacher_ids: vec![],
                assigned_groups: vec![],
                legacy_classes: vec![],
                problem_ids: vec![],
            })
            .await
            .unwrap()
            .id
    }

    fn service(
        store: Arc<crate::storage::memory::MemoryStorage>,
        blob: Arc<MemoryBlobStore>,
    ) -> AttachmentService {
        AttachmentService::with_quota(
            store,
            blob,
            AttachmentConfig {
                max_count: 10,
                max_total_size: 1024,
            },
        )
    }

    #[tokio::test]
    async fn test_upload_then_delete_round_trip() {
        let store = create_memory_storage();
        let blob = Arc::new(MemoryBlobStore::new());
        let course_id = seed_course(&store).await;
        let service = service(store.clone(), blob.clone());

        service
            .upload_attachment("system", course_id, "a.md", b"a".to_vec(), 1)
            .await
            .unwrap();
        let before = store
            .get_course("system", course_id)
            .await
            .unwrap()
            .unwrap()
            .attachments;

        service
            .upload_attachment("system", course_id, "b.md", b"b".to_vec(), 1)
            .await
            .unwrap();
        service
            .delete_attachments("system", course_id, &["b.md".to_string()], 1)
            .await
            .unwrap();

        // 上传后删除，附件列表恢复原状（剩余条目顺序不变）
        let after = store
            .get_course("system", course_id)
            .await
            .unwrap()
            .unwrap()
            .attachments;
        assert_eq!(before, after);

        // blob 同步删除
        assert!(
            blob.get_meta(&blob_path("system", course_id, "b.md"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete_multiple_preserves_remaining_order() {
        let store = create_memory_storage();
        let blob = Arc::new(MemoryBlobStore::new());
        let course_id = seed_course(&store).await;
        let service = service(store.clone(), blob);

        for name in ["a.md", "b.md", "c.md", "d.md"] {
            service
                .upload_attachment("system", course_id, name, b"x".to_vec(), 1)
                .await
                .unwrap();
        }
        service
            .delete_attachments(
                "system",
                course_id,
                &["a.md".to_string(), "c.md".to_string()],
                1,
            )
            .await
            .unwrap();

        let names: Vec<String> = store
            .get_course("system", course_id)
            .await
            .unwrap()
            .unwrap()
            .attachments
            .iter()
            .map(|a| a.name.clone())
            .collect();
        assert_eq!(names, vec!["b.md".to_string(), "d.md".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_on_missing_course() {
        let service = service(create_memory_storage(), Arc::new(MemoryBlobStore::new()));
        let err = service
            .delete_attachments("system", 999, &["a.md".to_string()], 1)
            .await
            .unwrap_err();
        assert!(matches!(err, CourseHubError::NotFound(_)));
    }
}
