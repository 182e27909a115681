use super::CourseService;
use super::visibility::build_course_filter;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::courses::requests::CourseListQuery;
use crate::models::courses::responses::CourseListResponse;
use crate::models::users::entities::Viewer;

pub async fn list_courses(
    service: &CourseService,
    domain_id: &str,
    viewer: &Viewer,
    query: CourseListQuery,
) -> Result<CourseListResponse> {
    let pagination = &AppConfig::get().pagination;
    let page = query.page.unwrap_or(1).max(1);
    let size = query
        .size
        .unwrap_or(pagination.default_size)
        .clamp(1, pagination.max_size);

    let filter = build_course_filter(viewer, &query);
    service.store().list_courses(domain_id, &filter, page, size).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::storage::create_memory_storage;
    use crate::storage::memory::MemoryBlobStore;

    fn service() -> CourseService {
        CourseService::new(create_memory_storage(), Arc::new(MemoryBlobStore::new()))
    }

    async fn create(service: &CourseService, title: &str, groups: &[&str], offset_days: i64) -> i64 {
        let begin = chrono::Utc::now() + chrono::Duration::days(offset_days);
        service
            .create_course(
                "system",
                CreateCourseRequest {
                    title: title.to_string(),
                    content: String::new(),
                    begin_at: begin,
                    end_at: begin + chrono::Duration::days(30),
                    owner_id: 1,
                    maintainer_ids: vec![],
                    teacher_ids: vec![],
                    assigned_groups: groups.iter().map(|s| s.to_string()).collect(),
                    problems: String::new(),
                },
            )
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_list_only_visible_courses() {
        let service = service();
        create(&service, "公开课", &[], 0).await;
        create(&service, "限定课", &["class-a"], 1).await;

        let outsider = Viewer::new(2).with_groups(&["class-b"]);
        let list = service
            .list_courses("system", &outsider, CourseListQuery::default())
            .await
            .unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].title, "公开课");
    }

    #[tokio::test]
    async fn test_list_newest_begin_first() {
        let service = service();
        let early = create(&service, "早课", &[], 0).await;
        let late = create(&service, "晚课", &[], 5).await;

        let viewer = Viewer::new(2);
        let list = service
            .list_courses("system", &viewer, CourseListQuery::default())
            .await
            .unwrap();
        let ids: Vec<i64> = list.items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![late, early]);
    }

    #[tokio::test]
    async fn test_list_title_search() {
        let service = service();
        create(&service, "Rust 程序设计", &[], 0).await;
        create(&service, "算法基础", &[], 1).await;

        let viewer = Viewer::new(2);
        let query = CourseListQuery {
            search: Some("rust".to_string()),
            ..Default::default()
        };
        let list = service.list_courses("system", &viewer, query).await.unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].title, "Rust 程序设计");
    }

    #[tokio::test]
    async fn test_list_group_filter_without_membership() {
        let service = service();
        create(&service, "A 班课程", &["class-a"], 0).await;
        create(&service, "B 班课程", &["class-b"], 1).await;

        // 显式分组过滤命中该分组的课程，即使查看者不属于它
        let viewer = Viewer::new(2);
        let query = CourseListQuery {
            group: Some("class-a".to_string()),
            ..Default::default()
        };
        let list = service.list_courses("system", &viewer, query).await.unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].title, "A 班课程");
    }
}
