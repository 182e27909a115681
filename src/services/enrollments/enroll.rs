use tracing::info;

use super::EnrollmentService;
use crate::errors::{CourseHubError, Result};
use crate::models::enrollments::entities::Enrollment;

/// 报名课程
///
/// 报名唯一性由存储层的条件写入保证；计数器随后单独自增，
/// 部分失败时允许短暂滞后于真实报名集合。
pub async fn enroll(
    service: &EnrollmentService,
    domain_id: &str,
    course_id: i64,
    user_id: i64,
) -> Result<Enrollment> {
    let course = service
        .store()
        .get_course(domain_id, course_id)
        .await?
        .ok_or_else(|| CourseHubError::not_found("course not found"))?;

    let now = chrono::Utc::now();
    if course.has_ended(now) {
        return Err(CourseHubError::course_ended(
            "course has ended, enrollment is closed",
        ));
    }

    let newly_enrolled = service
        .store()
        .set_attend_if_absent(domain_id, course_id, user_id, now)
        .await?;
    if !newly_enrolled {
        return Err(CourseHubError::already_enrolled(
            "user has already enrolled in this course",
        ));
    }

    service.store().inc_attend_count(domain_id, course_id, 1).await?;

    info!(
        "User {} enrolled in course {} (domain {})",
        user_id, course_id, domain_id
    );

    service
        .store()
        .get_enrollment(domain_id, course_id, user_id)
        .await?
        .ok_or_else(|| CourseHubError::storage_operation("enrollment vanished after creation"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::courses::requests::NewCourse;
    use crate::storage::{CourseStore, create_memory_storage};

    async fn seed_course(
        store: &Arc<crate::storage::memory::MemoryStorage>,
        begin_at: chrono::DateTime<chrono::Utc>,
        end_at: chrono::DateTime<chrono::Utc>,
    ) -> i64 {
        store
            .create_course(NewCourse {
                domain_id: "system".to_string(),
                title: "课程".to_string(),
                content: String::new(),
                begin_at,
                end_at,
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

    #[tokio::test]
    async fn test_enroll_once_then_conflict() {
        let store = create_memory_storage();
        let now = chrono::Utc::now();
        let course_id = seed_course(&store, now, now + chrono::Duration::days(30)).await;
        let service = EnrollmentService::new(store.clone());

        let enrollment = service.enroll("system", course_id, 7).await.unwrap();
        assert!(enrollment.attend);
        assert!(enrollment.enroll_at.is_some());

        let err = service.enroll("system", course_id, 7).await.unwrap_err();
        assert!(matches!(err, CourseHubError::AlreadyEnrolled(_)));

        // 冲突不追加计数
        let course = store.get_course("system", course_id).await.unwrap().unwrap();
        assert_eq!(course.attend_count, 1);
    }

    #[tokio::test]
    async fn test_enroll_after_course_end_fails() {
        let store = create_memory_storage();
        // 时间窗口 2024-01-01 ~ 2024-01-31，报名发生在其后
        let begin = "2024-01-01T00:00:00Z".parse().unwrap();
        let end = "2024-01-31T00:00:00Z".parse().unwrap();
        let course_id = seed_course(&store, begin, end).await;
        let service = EnrollmentService::new(store.clone());

        let err = service.enroll("system", course_id, 7).await.unwrap_err();
        assert!(matches!(err, CourseHubError::CourseEnded(_)));

        // 原子步骤之前就拒绝，不产生报名记录
        assert!(
            store
                .get_enrollment("system", course_id, 7)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_enroll_missing_course() {
        let service = EnrollmentService::new(create_memory_storage());
        let err = service.enroll("system", 999, 7).await.unwrap_err();
        assert!(matches!(err, CourseHubError::NotFound(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_enroll_single_winner() {
        let store = create_memory_storage();
        let now = chrono::Utc::now();
        let course_id = seed_course(&store, now, now + chrono::Duration::days(30)).await;
        let service = Arc::new(EnrollmentService::new(store.clone()));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.enroll("system", course_id, 7).await
            }));
        }

        let mut successes = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(CourseHubError::AlreadyEnrolled(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(conflicts, 7);

        // 恰好一次计数自增
        let course = store.get_course("system", course_id).await.unwrap().unwrap();
        assert_eq!(course.attend_count, 1);

        let enrolled = store.list_enrollments("system", course_id).await.unwrap();
        assert_eq!(enrolled.len(), 1);
    }
}
