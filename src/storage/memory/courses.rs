//! 课程文档存储操作

use std::sync::atomic::Ordering;

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::PaginationInfo;
use crate::models::attachments::entities::Attachment;
use crate::models::courses::{
    entities::Course,
    filter::CourseFilter,
    requests::{CourseUpdate, NewCourse},
    responses::CourseListResponse,
};

impl MemoryStorage {
    /// 创建课程
    pub(crate) async fn create_course_impl(&self, new: NewCourse) -> Result<Course> {
        let id = self.next_course_id.fetch_add(1, Ordering::SeqCst);
        let now = chrono::Utc::now();

        let course = Course {
            id,
            domain_id: new.domain_id,
            title: new.title,
            content: new.content,
            begin_at: new.begin_at,
            end_at: new.end_at,
            owner_id: new.owner_id,
            maintainer_ids: new.maintainer_ids,
            teacher_ids: new.teacher_ids,
            assigned_groups: new.assigned_groups,
            legacy_classes: new.legacy_classes,
            problem_ids: new.problem_ids,
            attend_count: 0,
            attachments: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.courses
            .insert((course.domain_id.clone(), id), course.clone());

        Ok(course)
    }

    /// 通过ID获取课程
    pub(crate) async fn get_course_impl(
        &self,
        domain_id: &str,
        course_id: i64,
    ) -> Result<Option<Course>> {
        Ok(self
            .courses
            .get(&(domain_id.to_string(), course_id))
            .map(|c| c.clone()))
    }

    /// 按过滤谓词分页列出课程
    pub(crate) async fn list_courses_impl(
        &self,
        domain_id: &str,
        filter: &CourseFilter,
        page: u64,
        size: u64,
    ) -> Result<CourseListResponse> {
        let mut matched: Vec<Course> = self
            .courses
            .iter()
            .filter(|entry| entry.key().0 == domain_id && filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        // 开始时间降序，相同开始时间按 ID 降序（后创建者在前）
        matched.sort_by(|a, b| b.begin_at.cmp(&a.begin_at).then(b.id.cmp(&a.id)));

        let page = page.max(1);
        let total = matched.len() as u64;
        let offset = ((page - 1) * size) as usize;
        let items: Vec<Course> = matched.into_iter().skip(offset).take(size as usize).collect();

        Ok(CourseListResponse {
            items,
            pagination: PaginationInfo::new(page, size, total),
        })
    }

    /// 更新课程字段
    pub(crate) async fn update_course_impl(
        &self,
        domain_id: &str,
        course_id: i64,
        update: CourseUpdate,
    ) -> Result<Option<Course>> {
        let key = (domain_id.to_string(), course_id);
        let Some(mut course) = self.courses.get_mut(&key) else {
            return Ok(None);
        };

        if let Some(title) = update.title {
            course.title = title;
        }
        if let Some(content) = update.content {
            course.content = content;
        }
        if let Some(begin_at) = update.begin_at {
            course.begin_at = begin_at;
        }
        if let Some(end_at) = update.end_at {
            course.end_at = end_at;
        }
        if let Some(maintainer_ids) = update.maintainer_ids {
            course.maintainer_ids = maintainer_ids;
        }
        if let Some(teacher_ids) = update.teacher_ids {
            course.teacher_ids = teacher_ids;
        }
        if let Some(assigned_groups) = update.assigned_groups {
            course.assigned_groups = assigned_groups;
        }
        if let Some(problem_ids) = update.problem_ids {
            course.problem_ids = problem_ids;
        }
        course.updated_at = chrono::Utc::now();

        Ok(Some(course.clone()))
    }

    /// 删除课程文档
    pub(crate) async fn delete_course_impl(&self, domain_id: &str, course_id: i64) -> Result<bool> {
        Ok(self
            .courses
            .remove(&(domain_id.to_string(), course_id))
            .is_some())
    }

    /// 报名计数器增减
    pub(crate) async fn inc_attend_count_impl(
        &self,
        domain_id: &str,
        course_id: i64,
        delta: i64,
    ) -> Result<()> {
        if let Some(mut course) = self.courses.get_mut(&(domain_id.to_string(), course_id)) {
            course.attend_count += delta;
        }
        Ok(())
    }

    /// 追加附件元数据，同名条目被替换
    pub(crate) async fn push_attachment_impl(
        &self,
        domain_id: &str,
        course_id: i64,
        attachment: Attachment,
    ) -> Result<bool> {
        let Some(mut course) = self.courses.get_mut(&(domain_id.to_string(), course_id)) else {
            return Ok(false);
        };
        course.attachments.retain(|a| a.name != attachment.name);
        course.attachments.push(attachment);
        course.updated_at = chrono::Utc::now();
        Ok(true)
    }

    /// 按名称移除附件元数据
    pub(crate) async fn pull_attachments_impl(
        &self,
        domain_id: &str,
        course_id: i64,
        names: &[String],
    ) -> Result<bool> {
        let Some(mut course) = self.courses.get_mut(&(domain_id.to_string(), course_id)) else {
            return Ok(false);
        };
        course.attachments.retain(|a| !names.contains(&a.name));
        course.updated_at = chrono::Utc::now();
        Ok(true)
    }
}
