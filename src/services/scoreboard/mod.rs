pub mod rows;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::scoreboard::responses::ScoreboardResponse;
use crate::models::users::entities::Viewer;
use crate::storage::{CourseStore, ProblemCatalog, UserDirectory};

pub struct ScoreboardService {
    store: Arc<dyn CourseStore>,
    directory: Arc<dyn UserDirectory>,
    catalog: Arc<dyn ProblemCatalog>,
}

impl ScoreboardService {
    pub fn new(
        store: Arc<dyn CourseStore>,
        directory: Arc<dyn UserDirectory>,
        catalog: Arc<dyn ProblemCatalog>,
    ) -> Self {
        Self {
            store,
            directory,
            catalog,
        }
    }

    pub(crate) fn store(&self) -> &Arc<dyn CourseStore> {
        &self.store
    }

    pub(crate) fn directory(&self) -> &Arc<dyn UserDirectory> {
        &self.directory
    }

    pub(crate) fn catalog(&self) -> &Arc<dyn ProblemCatalog> {
        &self.catalog
    }

    // 生成课程排行榜
    pub async fn scoreboard(
        &self,
        domain_id: &str,
        course_id: i64,
        viewer: &Viewer,
    ) -> Result<ScoreboardResponse> {
        rows::scoreboard(self, domain_id, course_id, viewer).await
    }
}
