//! 周边服务的内存参考实现
//!
//! Blob 存储、身份/分组服务、题库与评测记录的进程内实现，
//! 测试与开发环境用，生产实现由宿主平台提供。

use dashmap::DashMap;
use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::models::attachments::entities::BlobMeta;
use crate::models::problems::entities::ProblemSummary;
use crate::models::records::entities::RecordSummary;
use crate::models::users::entities::UserSummary;
use crate::storage::{BlobStore, ProblemCatalog, RecordStore, UserDirectory};

struct StoredBlob {
    data: Vec<u8>,
    last_modified: chrono::DateTime<chrono::Utc>,
    fingerprint: String,
}

/// 内存 Blob 存储
///
/// 内容指纹为 SHA-256 十六进制串。
pub struct MemoryBlobStore {
    blobs: DashMap<String, StoredBlob>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self {
            blobs: DashMap::new(),
        }
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, path: &str, data: Vec<u8>, _operator_id: i64) -> Result<()> {
        let fingerprint = hex::encode(Sha256::digest(&data));
        self.blobs.insert(
            path.to_string(),
            StoredBlob {
                data,
                last_modified: chrono::Utc::now(),
                fingerprint,
            },
        );
        Ok(())
    }

    async fn get_meta(&self, path: &str) -> Result<Option<BlobMeta>> {
        Ok(self.blobs.get(path).map(|blob| BlobMeta {
            size: blob.data.len() as i64,
            last_modified: blob.last_modified,
            fingerprint: blob.fingerprint.clone(),
        }))
    }

    async fn del(&self, paths: &[String], _operator_id: i64) -> Result<()> {
        for path in paths {
            self.blobs.remove(path);
        }
        Ok(())
    }

    async fn sign_download_link(
        &self,
        path: &str,
        display_name: Option<&str>,
        inline: bool,
    ) -> Result<String> {
        let mut link = format!("memory:///{path}");
        if let Some(name) = display_name {
            link.push_str(&format!("?filename={name}&inline={inline}"));
        } else {
            link.push_str(&format!("?inline={inline}"));
        }
        Ok(link)
    }
}

/// 内存身份与分组服务
pub struct MemoryUserDirectory {
    users: DashMap<i64, UserSummary>,
    user_groups: DashMap<(String, i64), Vec<String>>,
    domain_groups: DashMap<String, Vec<String>>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            user_groups: DashMap::new(),
            domain_groups: DashMap::new(),
        }
    }

    /// 填充用户摘要
    pub fn add_user(&self, user: UserSummary) {
        self.users.insert(user.id, user);
    }

    /// 设置用户在域内的分组
    pub fn set_user_groups(&self, domain_id: &str, user_id: i64, groups: Vec<String>) {
        self.user_groups
            .insert((domain_id.to_string(), user_id), groups);
    }

    /// 设置域内全部分组
    pub fn set_domain_groups(&self, domain_id: &str, groups: Vec<String>) {
        self.domain_groups.insert(domain_id.to_string(), groups);
    }
}

impl Default for MemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn get_user_groups(&self, domain_id: &str, user_id: i64) -> Result<Vec<String>> {
        Ok(self
            .user_groups
            .get(&(domain_id.to_string(), user_id))
            .map(|g| g.clone())
            .unwrap_or_default())
    }

    async fn list_domain_groups(&self, domain_id: &str) -> Result<Vec<String>> {
        Ok(self
            .domain_groups
            .get(domain_id)
            .map(|g| g.clone())
            .unwrap_or_default())
    }

    async fn get_user_summaries(&self, user_ids: &[i64]) -> Result<Vec<UserSummary>> {
        Ok(user_ids
            .iter()
            .filter_map(|id| self.users.get(id).map(|u| u.clone()))
            .collect())
    }
}

/// 内存题库服务
pub struct MemoryProblemCatalog {
    problems: DashMap<(String, i64), ProblemSummary>,
}

impl MemoryProblemCatalog {
    pub fn new() -> Self {
        Self {
            problems: DashMap::new(),
        }
    }

    pub fn add_problem(&self, domain_id: &str, problem: ProblemSummary) {
        self.problems
            .insert((domain_id.to_string(), problem.id), problem);
    }
}

impl Default for MemoryProblemCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProblemCatalog for MemoryProblemCatalog {
    async fn get_problem_summaries(
        &self,
        domain_id: &str,
        problem_ids: &[i64],
        include_hidden: bool,
    ) -> Result<Vec<ProblemSummary>> {
        Ok(problem_ids
            .iter()
            .filter_map(|id| {
                self.problems
                    .get(&(domain_id.to_string(), *id))
                    .map(|p| p.clone())
            })
            .filter(|p| include_hidden || !p.hidden)
            .collect())
    }
}

/// 内存评测记录服务
pub struct MemoryRecordStore {
    records: DashMap<i64, RecordSummary>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn add_record(&self, record: RecordSummary) {
        self.records.insert(record.id, record);
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get_record_summaries(&self, record_ids: &[i64]) -> Result<Vec<RecordSummary>> {
        Ok(record_ids
            .iter()
            .filter_map(|id| self.records.get(id).map(|r| r.clone()))
            .collect())
    }

    async fn list_records_by_problems(
        &self,
        domain_id: &str,
        problem_ids: &[i64],
        user_id: Option<i64>,
    ) -> Result<Vec<RecordSummary>> {
        let mut matched: Vec<RecordSummary> = self
            .records
            .iter()
            .filter(|entry| {
                let record = entry.value();
                record.domain_id == domain_id
                    && problem_ids.contains(&record.problem_id)
                    && user_id.is_none_or(|uid| record.user_id == uid)
            })
            .map(|entry| entry.value().clone())
            .collect();

        // 评测时间降序，新记录在前
        matched.sort_by(|a, b| b.judged_at.cmp(&a.judged_at).then(b.id.cmp(&a.id)));

        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blob_put_then_meta() {
        let blobs = MemoryBlobStore::new();
        blobs.put("course/system/1/a.txt", b"hello".to_vec(), 1).await.unwrap();

        let meta = blobs.get_meta("course/system/1/a.txt").await.unwrap().unwrap();
        assert_eq!(meta.size, 5);
        assert_eq!(meta.fingerprint.len(), 64);
    }

    #[tokio::test]
    async fn test_blob_meta_absent_after_del() {
        let blobs = MemoryBlobStore::new();
        blobs.put("course/system/1/a.txt", b"hello".to_vec(), 1).await.unwrap();
        blobs
            .del(&["course/system/1/a.txt".to_string()], 1)
            .await
            .unwrap();
        assert!(blobs.get_meta("course/system/1/a.txt").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fingerprint_tracks_content() {
        let blobs = MemoryBlobStore::new();
        blobs.put("a", b"one".to_vec(), 1).await.unwrap();
        let first = blobs.get_meta("a").await.unwrap().unwrap().fingerprint;
        blobs.put("a", b"two".to_vec(), 1).await.unwrap();
        let second = blobs.get_meta("a").await.unwrap().unwrap().fingerprint;
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_directory_groups_round_trip() {
        let directory = MemoryUserDirectory::new();
        directory.set_user_groups("system", 7, vec!["class-a".to_string()]);
        directory.set_domain_groups(
            "system",
            vec!["class-a".to_string(), "class-b".to_string()],
        );

        assert_eq!(
            directory.get_user_groups("system", 7).await.unwrap(),
            vec!["class-a".to_string()]
        );
        assert_eq!(directory.list_domain_groups("system").await.unwrap().len(), 2);
        // 其他域不受影响
        assert!(directory.list_domain_groups("other").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_summaries_skip_unknown_ids() {
        let records = MemoryRecordStore::new();
        records.add_record(RecordSummary {
            id: 1,
            domain_id: "system".to_string(),
            user_id: 7,
            problem_id: 100,
            score: 50,
            status: 1,
            judged_at: chrono::Utc::now(),
        });

        let resolved = records.get_record_summaries(&[1, 2]).await.unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, 1);
    }

    #[tokio::test]
    async fn test_catalog_hidden_filtering() {
        let catalog = MemoryProblemCatalog::new();
        catalog.add_problem(
            "system",
            ProblemSummary {
                id: 1,
                title: "A".to_string(),
                hidden: false,
            },
        );
        catalog.add_problem(
            "system",
            ProblemSummary {
                id: 2,
                title: "B".to_string(),
                hidden: true,
            },
        );

        let visible = catalog
            .get_problem_summaries("system", &[1, 2], false)
            .await
            .unwrap();
        assert_eq!(visible.len(), 1);

        let all = catalog
            .get_problem_summaries("system", &[1, 2], true)
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }
}
