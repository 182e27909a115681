pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::records::{entities::RecordSummary, requests::RecordListQuery};
use crate::models::users::entities::Viewer;
use crate::storage::{CourseStore, RecordStore};

pub struct RecordService {
    store: Arc<dyn CourseStore>,
    records: Arc<dyn RecordStore>,
}

impl RecordService {
    pub fn new(store: Arc<dyn CourseStore>, records: Arc<dyn RecordStore>) -> Self {
        Self { store, records }
    }

    pub(crate) fn store(&self) -> &Arc<dyn CourseStore> {
        &self.store
    }

    pub(crate) fn records(&self) -> &Arc<dyn RecordStore> {
        &self.records
    }

    // 列出课程题目集合上的提交记录
    pub async fn list_course_records(
        &self,
        domain_id: &str,
        course_id: i64,
        viewer: &Viewer,
        query: RecordListQuery,
    ) -> Result<Vec<RecordSummary>> {
        list::list_course_records(self, domain_id, course_id, viewer, query).await
    }
}
