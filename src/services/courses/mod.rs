pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
pub mod visibility;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::{
    entities::Course,
    requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    responses::CourseListResponse,
};
use crate::models::users::entities::Viewer;
use crate::storage::{BlobStore, CourseStore};

pub struct CourseService {
    store: Arc<dyn CourseStore>,
    blob: Arc<dyn BlobStore>,
}

impl CourseService {
    pub fn new(store: Arc<dyn CourseStore>, blob: Arc<dyn BlobStore>) -> Self {
        Self { store, blob }
    }

    pub(crate) fn store(&self) -> &Arc<dyn CourseStore> {
        &self.store
    }

    pub(crate) fn blob(&self) -> &Arc<dyn BlobStore> {
        &self.blob
    }

    // 创建课程
    pub async fn create_course(
        &self,
        domain_id: &str,
        course_data: CreateCourseRequest,
    ) -> Result<Course> {
        create::create_course(self, domain_id, course_data).await
    }

    // 以查看者视角获取课程
    pub async fn get_course(
        &self,
        domain_id: &str,
        course_id: i64,
        viewer: &Viewer,
    ) -> Result<Course> {
        get::get_course(self, domain_id, course_id, viewer).await
    }

    // 以查看者视角列出课程
    pub async fn list_courses(
        &self,
        domain_id: &str,
        viewer: &Viewer,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        list::list_courses(self, domain_id, viewer, query).await
    }

    // 更新课程信息
    pub async fn update_course(
        &self,
        domain_id: &str,
        course_id: i64,
        update_data: UpdateCourseRequest,
    ) -> Result<Course> {
        update::update_course(self, domain_id, course_id, update_data).await
    }

    // 删除课程（级联报名记录与附件）
    pub async fn delete_course(&self, domain_id: &str, course_id: i64) -> Result<()> {
        delete::delete_course(self, domain_id, course_id).await
    }
}
