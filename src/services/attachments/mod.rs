pub mod delete;
pub mod list;
pub mod upload;

use std::sync::Arc;

use crate::config::{AppConfig, AttachmentConfig};
use crate::errors::Result;
use crate::models::attachments::entities::Attachment;
use crate::storage::{BlobStore, CourseStore};

/// 课程附件在 Blob 存储中的路径
pub(crate) fn blob_path(domain_id: &str, course_id: i64, name: &str) -> String {
    format!("course/{domain_id}/{course_id}/{name}")
}

pub struct AttachmentService {
    store: Arc<dyn CourseStore>,
    blob: Arc<dyn BlobStore>,
    quota: AttachmentConfig,
}

impl AttachmentService {
    pub fn new(store: Arc<dyn CourseStore>, blob: Arc<dyn BlobStore>) -> Self {
        Self::with_quota(store, blob, AppConfig::get().attachment.clone())
    }

    /// 指定配额上限构造（测试与多租户宿主用）
    pub fn with_quota(
        store: Arc<dyn CourseStore>,
        blob: Arc<dyn BlobStore>,
        quota: AttachmentConfig,
    ) -> Self {
        Self { store, blob, quota }
    }

    pub(crate) fn store(&self) -> &Arc<dyn CourseStore> {
        &self.store
    }

    pub(crate) fn blob(&self) -> &Arc<dyn BlobStore> {
        &self.blob
    }

    pub(crate) fn quota(&self) -> &AttachmentConfig {
        &self.quota
    }

    // 列出课程附件
    pub async fn list_attachments(&self, domain_id: &str, course_id: i64) -> Result<Vec<Attachment>> {
        list::list_attachments(self, domain_id, course_id).await
    }

    // 生成附件下载链接
    pub async fn download_link(
        &self,
        domain_id: &str,
        course_id: i64,
        name: &str,
        inline: bool,
    ) -> Result<String> {
        list::download_link(self, domain_id, course_id, name, inline).await
    }

    // 上传附件（配额检查通过后写入）
    pub async fn upload_attachment(
        &self,
        domain_id: &str,
        course_id: i64,
        name: &str,
        data: Vec<u8>,
        operator_id: i64,
    ) -> Result<Attachment> {
        upload::upload_attachment(self, domain_id, course_id, name, data, operator_id).await
    }

    // 删除附件（元数据与 blob 并发删除，各自尽力而为）
    pub async fn delete_attachments(
        &self,
        domain_id: &str,
        course_id: i64,
        names: &[String],
        operator_id: i64,
    ) -> Result<()> {
        delete::delete_attachments(self, domain_id, course_id, names, operator_id).await
    }
}
